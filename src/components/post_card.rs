//! Post card for the dashboard activity feed.

use leptos::prelude::*;

use crate::net::types::Post;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <div class="post-card">
            <div class="post-card__header">
                <span class="post-card__author">{post.author_username}</span>
                {post.club_name.map(|club| {
                    view! { <span class="post-card__club">{club}</span> }
                })}
            </div>
            <p class="post-card__content">{post.content}</p>
            <span class="post-card__time">{post.created_at}</span>
        </div>
    }
}
