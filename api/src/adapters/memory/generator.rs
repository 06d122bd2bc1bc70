//! Deterministic post generation
//!
//! Every field of a generated post is derived from its index: the image from
//! a fixed rotation, the caption, author and like count from a random number
//! generator seeded with the index.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::{Post, PostId};

pub const IMAGE_URLS: [&str; 10] = [
    "https://picsum.photos/id/1/800/600",
    "https://picsum.photos/id/10/800/600",
    "https://picsum.photos/id/20/800/600",
    "https://picsum.photos/id/30/800/600",
    "https://picsum.photos/id/40/800/600",
    "https://picsum.photos/id/50/800/600",
    "https://picsum.photos/id/60/800/600",
    "https://picsum.photos/id/70/800/600",
    "https://picsum.photos/id/80/800/600",
    "https://picsum.photos/id/100/800/600",
];

pub const CAPTIONS: [&str; 15] = [
    "Beautiful sunset at the beach 🌅",
    "Amazing view from the mountains! ⛰️",
    "Just another day in paradise",
    "Living my best life ✨",
    "Nature never goes out of style 🌿",
    "Making memories one photo at a time",
    "Adventure awaits! 🚀",
    "Exploring new places",
    "Grateful for moments like these 🙏",
    "Chasing dreams and sunsets",
    "Life is short, make it sweet 🍭",
    "Weekend vibes only",
    "Finding beauty in simple things",
    "Taking it one day at a time",
    "Coffee and contemplation ☕",
];

pub const AUTHOR_NAMES: [&str; 12] = [
    "Alex Johnson",
    "Maria Garcia",
    "John Smith",
    "Emma Wilson",
    "Michael Brown",
    "Sophia Davis",
    "James Miller",
    "Olivia Martinez",
    "William Anderson",
    "Isabella Taylor",
    "David Thomas",
    "Mia Jackson",
];

/// Seeded like counts fall in `[MIN_SEED_LIKES, MAX_SEED_LIKES)`
pub const MIN_SEED_LIKES: i32 = 50;
pub const MAX_SEED_LIKES: i32 = 5000;

/// Build the post at `index`, timestamped `index` hours before `now`.
///
/// Draw order is caption, author, like count.
pub fn generate_post(index: i64, now: DateTime<Utc>) -> Post {
    let mut rng = StdRng::seed_from_u64(index as u64);

    let caption = CAPTIONS[rng.gen_range(0..CAPTIONS.len())];
    let author_name = AUTHOR_NAMES[rng.gen_range(0..AUTHOR_NAMES.len())];
    let like_count = rng.gen_range(MIN_SEED_LIKES..MAX_SEED_LIKES);

    Post {
        id: PostId::from_index(index),
        image_url: IMAGE_URLS[(index as usize) % IMAGE_URLS.len()].to_string(),
        caption: caption.to_string(),
        author_name: author_name.to_string(),
        like_count,
        is_liked: false,
        timestamp: Duration::try_hours(index)
            .and_then(|age| now.checked_sub_signed(age))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
    }
}
