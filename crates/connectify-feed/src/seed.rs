//! The fixed dataset a fresh client boots with.
//!
//! Ten accounts, twenty posts, two comments, and a points table, all with
//! stable ids and timestamps so scenarios are reproducible:
//! `taha@connectify.com` is always user 1 with username `taharoshaan`,
//! post 1 is always at the head of the feed, and the leaderboard always
//! opens with `lisa_travel` at 2450 points.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use connectify_token::UserId;

use crate::models::{Comment, CommentId, Post, PostId, User};
use crate::FeedStore;

/// Every seed instant falls inside January 2024.
fn jan(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0)
        .single()
        .expect("valid seed timestamp")
}

/// Profile-sized avatar URL for a pexels photo id.
fn avatar(photo_id: u64) -> String {
    format!(
        "https://images.pexels.com/photos/{photo_id}/pexels-photo-{photo_id}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
    )
}

/// Feed-sized image URL for a pexels photo id.
fn photo(photo_id: u64) -> String {
    format!(
        "https://images.pexels.com/photos/{photo_id}/pexels-photo-{photo_id}.jpeg?auto=compress&cs=tinysrgb&w=600"
    )
}

fn user(
    id: u64,
    username: &str,
    email: &str,
    photo_id: u64,
    bio: &str,
    verified: bool,
    created_at: DateTime<Utc>,
) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
        email: email.to_string(),
        avatar: avatar(photo_id),
        bio: Some(bio.to_string()),
        verified,
        created_at,
    }
}

/// `counts` is `(likes, shares)`.
fn post(
    id: u64,
    author: &User,
    content: &str,
    image: Option<u64>,
    counts: (u32, u32),
    created_at: DateTime<Utc>,
    liked: bool,
) -> Post {
    Post {
        id: PostId(id),
        author_id: author.id,
        username: author.username.clone(),
        avatar: author.avatar.clone(),
        verified: author.verified,
        content: content.to_string(),
        image: image.map(photo),
        likes: counts.0,
        liked,
        comments: Vec::new(),
        shares: counts.1,
        created_at,
        updated_at: None,
    }
}

fn comment(
    id: u64,
    post_id: u64,
    author: &User,
    content: &str,
    created_at: DateTime<Utc>,
    likes: u32,
    liked: bool,
) -> Comment {
    Comment {
        id: CommentId(id),
        post_id: PostId(post_id),
        author_id: author.id,
        username: author.username.clone(),
        avatar: author.avatar.clone(),
        content: content.to_string(),
        likes,
        liked,
        created_at,
    }
}

impl FeedStore {
    /// A store pre-populated with the stock Connectify dataset.
    ///
    /// Id counters resume past the seeded rows, so the first account
    /// created at runtime is user 11, the first new post is post 21, and
    /// the first new comment is comment 3.
    pub fn seeded() -> Self {
        let users = vec![
            user(
                1,
                "taharoshaan",
                "taha@connectify.com",
                771742,
                "Digital creator and tech enthusiast 🚀",
                true,
                jan(15, 10, 0),
            ),
            user(
                2,
                "sarah_jones",
                "sarah@example.com",
                415829,
                "Travel blogger & photographer 📸",
                false,
                jan(10, 10, 0),
            ),
            user(
                3,
                "mike_dev",
                "mike@example.com",
                1043471,
                "Full-stack developer 💻",
                true,
                jan(8, 10, 0),
            ),
            user(
                4,
                "alex_tech",
                "alex@example.com",
                220453,
                "Tech enthusiast & gamer 🎮",
                false,
                jan(5, 10, 0),
            ),
            user(
                5,
                "emma_design",
                "emma@example.com",
                1239291,
                "UX/UI Designer creating beautiful experiences ✨",
                true,
                jan(12, 10, 0),
            ),
            user(
                6,
                "david_code",
                "david@example.com",
                614810,
                "Software engineer building the future 🔧",
                false,
                jan(9, 10, 0),
            ),
            user(
                7,
                "lisa_travel",
                "lisa@example.com",
                774909,
                "World traveler sharing adventures 🌎",
                true,
                jan(14, 10, 0),
            ),
            user(
                8,
                "john_music",
                "john@example.com",
                1681010,
                "Music producer and DJ 🎵",
                false,
                jan(11, 10, 0),
            ),
            user(
                9,
                "sophia_art",
                "sophia@example.com",
                1024311,
                "Digital artist creating magical worlds 🎨",
                true,
                jan(13, 10, 0),
            ),
            user(
                10,
                "ryan_fitness",
                "ryan@example.com",
                1121796,
                "Fitness coach helping you reach your goals 💪",
                false,
                jan(7, 10, 0),
            ),
        ];
        let (taha, sarah, mike) = (&users[0], &users[1], &users[2]);

        let mut posts = vec![
            post(
                1,
                taha,
                "Just launched my new project on Connectify! The future of social networking is here 🚀 #Innovation #TechLife",
                Some(1181216),
                (128, 24),
                jan(20, 14, 30),
                false,
            ),
            post(
                2,
                sarah,
                "Amazing sunset from my latest adventure in Santorini! Sometimes you need to disconnect to reconnect ✨",
                Some(1566909),
                (342, 67),
                jan(20, 12, 15),
                true,
            ),
            post(
                3,
                mike,
                "Coffee, code, repeat ☕ Working on an exciting new feature for our platform. Can't wait to share it with you all!",
                None,
                (89, 12),
                jan(20, 9, 45),
                false,
            ),
            post(
                4,
                sarah,
                "Just finished reading this amazing book on mindfulness. Highly recommend it to anyone looking to reduce stress and improve focus 📚",
                Some(590493),
                (156, 28),
                jan(19, 17, 30),
                false,
            ),
            post(
                5,
                mike,
                "Just solved a complex algorithm problem that's been bugging me for days! The key was using dynamic programming instead of a greedy approach 💡 #CodingLife",
                None,
                (201, 45),
                jan(19, 14, 20),
                true,
            ),
            post(
                6,
                taha,
                "Attended an amazing tech conference today! Met so many brilliant minds and got inspired by the future of AI and machine learning 🤖 #TechConference",
                Some(2774556),
                (278, 56),
                jan(19, 10, 15),
                false,
            ),
            post(
                7,
                sarah,
                "Morning hike with the most breathtaking view! Nature always has a way of putting things into perspective 🏞️ #MorningHike #NatureLover",
                Some(417074),
                (312, 78),
                jan(18, 8, 45),
                true,
            ),
            post(
                8,
                mike,
                "Just released a new open-source library for React developers! Check it out on GitHub and let me know what you think 🚀 #OpenSource #ReactJS",
                None,
                (189, 92),
                jan(18, 16, 30),
                false,
            ),
            post(
                9,
                taha,
                "Just finished my morning workout routine. Starting the day with exercise really sets a positive tone for everything else! 💪 #FitnessJourney",
                Some(841130),
                (145, 23),
                jan(17, 7, 30),
                true,
            ),
            post(
                10,
                sarah,
                "Exploring the local farmers market today! Supporting local businesses and getting fresh produce is a win-win 🥕🍎 #ShopLocal",
                Some(95425),
                (167, 34),
                jan(17, 11, 20),
                false,
            ),
            post(
                11,
                mike,
                "Working from a cozy cafe today. Sometimes a change of environment is all you need to boost productivity! ☕💻 #RemoteWork",
                Some(302899),
                (203, 41),
                jan(16, 13, 45),
                true,
            ),
            post(
                12,
                taha,
                "Just watched an incredible documentary on space exploration. The universe is so vast and mysterious! 🌌 #SpaceLovers",
                None,
                (231, 67),
                jan(16, 20, 10),
                false,
            ),
            post(
                13,
                sarah,
                "Trying out a new vegan recipe today! Surprised by how delicious plant-based meals can be 🌱 #VeganCooking",
                Some(1640777),
                (178, 39),
                jan(15, 18, 30),
                true,
            ),
            post(
                14,
                mike,
                "Just upgraded my development setup with a new mechanical keyboard. The typing experience is on another level! ⌨️ #DevSetup",
                Some(1772123),
                (156, 28),
                jan(15, 14, 15),
                false,
            ),
            post(
                15,
                taha,
                "Spent the weekend mentoring young coders at a local hackathon. So inspiring to see the next generation of tech talent! 👩‍💻👨‍💻 #GivingBack",
                None,
                (289, 76),
                jan(14, 19, 45),
                true,
            ),
            post(
                16,
                sarah,
                "Just finished my first pottery class! There's something so therapeutic about creating with your hands 🏺 #NewHobby",
                Some(1098365),
                (201, 42),
                jan(14, 16, 20),
                false,
            ),
            post(
                17,
                mike,
                "Just discovered this amazing productivity technique that's changed my workflow completely! Anyone else tried the Pomodoro method? ⏱️ #Productivity",
                None,
                (167, 53),
                jan(13, 11, 30),
                true,
            ),
            post(
                18,
                taha,
                "Celebrating 5 years at my company today! Grateful for the amazing journey, challenges, and growth opportunities 🎉 #WorkAnniversary",
                Some(3184183),
                (312, 87),
                jan(13, 9, 15),
                false,
            ),
            post(
                19,
                sarah,
                "Just adopted this adorable rescue puppy! Meet Max, the newest member of our family 🐶 #AdoptDontShop",
                Some(1108099),
                (423, 112),
                jan(12, 15, 40),
                true,
            ),
            post(
                20,
                mike,
                "Just published my first technical article on Medium! It's about optimizing React performance. Would love your feedback! 📝 #TechWriting",
                Some(577585),
                (245, 89),
                jan(12, 10, 25),
                false,
            ),
        ];

        posts[0].comments.push(comment(
            1,
            1,
            sarah,
            "This looks incredible! Can't wait to try it out 🔥",
            jan(20, 15, 0),
            12,
            false,
        ));
        posts[1].comments.push(comment(
            2,
            2,
            mike,
            "Absolutely stunning! Greece is definitely on my travel list now 🏛️",
            jan(20, 13, 30),
            8,
            true,
        ));

        let points = HashMap::from([
            (UserId(1), 1250),
            (UserId(2), 980),
            (UserId(3), 1560),
            (UserId(4), 2100),
            (UserId(5), 1850),
            (UserId(6), 1340),
            (UserId(7), 2450),
            (UserId(8), 890),
            (UserId(9), 1780),
            (UserId(10), 1650),
        ]);

        Self::from_parts(users, posts, points)
    }
}
