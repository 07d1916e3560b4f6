//! Integration tests for the feed store: credentials, post and comment
//! mutations, the vote model, profile propagation, and the leaderboard.

use connectify_feed::{
    CommentId, FeedError, FeedStore, NewUser, PostId, ProfileUpdate, UserId, MOCK_PASSWORD,
    VOTE_WEIGHT,
};

// =========================================================================
// Helpers
// =========================================================================

fn uid(n: u64) -> UserId {
    UserId(n)
}

fn pid(n: u64) -> PostId {
    PostId(n)
}

fn cid(n: u64) -> CommentId {
    CommentId(n)
}

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
    }
}

fn profile(username: &str, bio: &str, avatar: &str) -> ProfileUpdate {
    ProfileUpdate {
        username: username.to_string(),
        bio: Some(bio.to_string()),
        avatar: avatar.to_string(),
    }
}

// =========================================================================
// Seed dataset
// =========================================================================

#[test]
fn test_seeded_store_has_ten_users_and_twenty_posts() {
    let store = FeedStore::seeded();
    assert_eq!(store.user_count(), 10);
    assert_eq!(store.post_count(), 20);
}

#[test]
fn test_seeded_lookups_by_email_id_and_username_agree() {
    let store = FeedStore::seeded();

    let by_email = store.find_user_by_email("taha@connectify.com").unwrap();
    let by_id = store.find_user_by_id(uid(1)).unwrap();
    let by_username = store.find_user_by_username("taharoshaan").unwrap();

    assert_eq!(by_email, by_id);
    assert_eq!(by_id, by_username);
    assert!(by_id.verified);
}

#[test]
fn test_seeded_comments_sit_under_their_posts() {
    let store = FeedStore::seeded();

    let first = store.post(pid(1)).unwrap();
    assert_eq!(first.comments.len(), 1);
    assert_eq!(first.comments[0].id, cid(1));
    assert_eq!(first.comments[0].username, "sarah_jones");

    let comment = store.comment(cid(2)).unwrap();
    assert_eq!(comment.post_id, pid(2));
    assert_eq!(comment.username, "mike_dev");
}

// =========================================================================
// Credentials
// =========================================================================

#[test]
fn test_authenticate_known_email_succeeds() {
    let store = FeedStore::seeded();
    let user = store
        .authenticate("taha@connectify.com", MOCK_PASSWORD)
        .unwrap();
    assert_eq!(user.username, "taharoshaan");
}

#[test]
fn test_authenticate_wrong_password_fails() {
    let store = FeedStore::seeded();
    let err = store
        .authenticate("taha@connectify.com", "wrong")
        .unwrap_err();
    assert!(matches!(err, FeedError::InvalidCredentials));
}

#[test]
fn test_authenticate_unknown_email_fails_identically() {
    let store = FeedStore::seeded();
    let err = store
        .authenticate("nobody@example.com", MOCK_PASSWORD)
        .unwrap_err();
    assert!(matches!(err, FeedError::InvalidCredentials));
}

// =========================================================================
// Account creation
// =========================================================================

#[test]
fn test_create_user_mints_fresh_id_and_stock_profile() {
    let mut store = FeedStore::seeded();
    let user = store
        .create_user(new_user("newcomer", "new@example.com"))
        .unwrap();

    assert_eq!(user.id, uid(11));
    assert_eq!(user.bio.as_deref(), Some("New to Connectify! 👋"));
    assert!(!user.verified);
    assert_eq!(store.user_count(), 11);
}

#[test]
fn test_create_user_duplicate_email_inserts_nothing() {
    let mut store = FeedStore::seeded();
    let err = store
        .create_user(new_user("different_name", "taha@connectify.com"))
        .unwrap_err();

    assert!(matches!(err, FeedError::EmailTaken(_)));
    assert_eq!(store.user_count(), 10);
    assert!(store.find_user_by_username("different_name").is_none());
}

#[test]
fn test_create_user_duplicate_username_inserts_nothing() {
    let mut store = FeedStore::seeded();
    let err = store
        .create_user(new_user("mike_dev", "fresh@example.com"))
        .unwrap_err();

    assert!(matches!(err, FeedError::UsernameTaken(_)));
    assert_eq!(store.user_count(), 10);
}

#[test]
fn test_created_user_can_authenticate_with_shared_password() {
    let mut store = FeedStore::seeded();
    store
        .create_user(new_user("newcomer", "new@example.com"))
        .unwrap();

    let user = store.authenticate("new@example.com", MOCK_PASSWORD).unwrap();
    assert_eq!(user.username, "newcomer");
}

// =========================================================================
// Posts
// =========================================================================

#[test]
fn test_create_post_lands_at_head_of_feed() {
    let mut store = FeedStore::seeded();
    let post = store
        .create_post(uid(3), "fresh off the keyboard".to_string(), None)
        .unwrap();

    assert_eq!(store.posts()[0].id, post.id);
    assert_eq!(store.post_count(), 21);
    assert_eq!(post.likes, 0);
    assert!(!post.liked);
    assert!(post.comments.is_empty());
}

#[test]
fn test_create_post_snapshots_author_fields() {
    let mut store = FeedStore::seeded();
    let post = store
        .create_post(uid(1), "hello".to_string(), None)
        .unwrap();

    let author = store.find_user_by_id(uid(1)).unwrap();
    assert_eq!(post.username, author.username);
    assert_eq!(post.avatar, author.avatar);
    assert_eq!(post.verified, author.verified);
}

#[test]
fn test_create_post_unknown_author_fails() {
    let mut store = FeedStore::seeded();
    let err = store
        .create_post(uid(99), "ghost post".to_string(), None)
        .unwrap_err();
    assert!(matches!(err, FeedError::UserNotFound(id) if id == uid(99)));
}

#[test]
fn test_update_post_replaces_content_and_stamps_updated_at() {
    let mut store = FeedStore::seeded();
    let updated = store
        .update_post(pid(1), uid(1), "edited".to_string(), None)
        .unwrap();

    assert_eq!(updated.content, "edited");
    assert!(updated.updated_at.is_some());
    assert_eq!(store.post(pid(1)).unwrap().content, "edited");
}

#[test]
fn test_update_post_keeps_image_when_none_is_passed() {
    let mut store = FeedStore::seeded();
    let before = store.post(pid(1)).unwrap().image.clone();
    assert!(before.is_some());

    let updated = store
        .update_post(pid(1), uid(1), "edited".to_string(), None)
        .unwrap();
    assert_eq!(updated.image, before);

    let updated = store
        .update_post(
            pid(1),
            uid(1),
            "edited again".to_string(),
            Some("https://example.com/new.jpeg".to_string()),
        )
        .unwrap();
    assert_eq!(updated.image.as_deref(), Some("https://example.com/new.jpeg"));
}

#[test]
fn test_update_post_by_non_author_is_rejected() {
    let mut store = FeedStore::seeded();
    // Post 1 belongs to user 1.
    let err = store
        .update_post(pid(1), uid(2), "hijacked".to_string(), None)
        .unwrap_err();

    assert!(matches!(err, FeedError::NotPostAuthor(p, u) if p == pid(1) && u == uid(2)));
    assert_ne!(store.post(pid(1)).unwrap().content, "hijacked");
}

#[test]
fn test_delete_post_removes_it_with_its_comments() {
    let mut store = FeedStore::seeded();
    store.delete_post(pid(1), uid(1)).unwrap();

    assert!(store.post(pid(1)).is_none());
    assert!(store.comment(cid(1)).is_none());
    assert_eq!(store.post_count(), 19);
}

#[test]
fn test_delete_post_by_non_author_is_rejected() {
    let mut store = FeedStore::seeded();
    let err = store.delete_post(pid(1), uid(3)).unwrap_err();

    assert!(matches!(err, FeedError::NotPostAuthor(_, _)));
    assert!(store.post(pid(1)).is_some());
}

#[test]
fn test_user_posts_filters_by_author() {
    let store = FeedStore::seeded();
    let posts = store.user_posts(uid(1));

    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p.author_id == uid(1)));
    // Subset of the feed keeps the feed's ordering.
    assert_eq!(posts[0].id, pid(1));
}

// =========================================================================
// Votes
// =========================================================================

#[test]
fn test_vote_adds_weight_and_sets_liked() {
    let mut store = FeedStore::seeded();
    let before = store.post(pid(1)).unwrap().likes;

    store.vote(pid(1)).unwrap();

    let post = store.post(pid(1)).unwrap();
    assert!(post.liked);
    assert_eq!(post.likes, before + VOTE_WEIGHT);
}

#[test]
fn test_vote_twice_counts_once() {
    let mut store = FeedStore::seeded();
    let before = store.post(pid(1)).unwrap().likes;

    store.vote(pid(1)).unwrap();
    store.vote(pid(1)).unwrap();

    assert_eq!(store.post(pid(1)).unwrap().likes, before + VOTE_WEIGHT);
}

#[test]
fn test_unvote_returns_score_to_baseline() {
    let mut store = FeedStore::seeded();
    let before = store.post(pid(1)).unwrap().likes;

    store.vote(pid(1)).unwrap();
    store.unvote(pid(1)).unwrap();

    let post = store.post(pid(1)).unwrap();
    assert!(!post.liked);
    assert_eq!(post.likes, before);
}

#[test]
fn test_unvote_when_not_liked_changes_nothing() {
    let mut store = FeedStore::seeded();
    // Post 1 is seeded un-liked.
    let before = store.post(pid(1)).unwrap().likes;

    store.unvote(pid(1)).unwrap();
    store.unvote(pid(1)).unwrap();

    let post = store.post(pid(1)).unwrap();
    assert!(!post.liked);
    assert_eq!(post.likes, before);
}

#[test]
fn test_vote_unknown_post_fails() {
    let mut store = FeedStore::seeded();
    assert!(matches!(
        store.vote(pid(999)).unwrap_err(),
        FeedError::PostNotFound(_)
    ));
    assert!(matches!(
        store.unvote(pid(999)).unwrap_err(),
        FeedError::PostNotFound(_)
    ));
}

// =========================================================================
// Comments
// =========================================================================

#[test]
fn test_add_comment_appends_in_insertion_order() {
    let mut store = FeedStore::seeded();

    let first = store
        .add_comment(pid(1), "one".to_string(), uid(3))
        .unwrap();
    let second = store
        .add_comment(pid(1), "two".to_string(), uid(2))
        .unwrap();

    let post = store.post(pid(1)).unwrap();
    // Seed comment 1 sits in front of the two new ones.
    assert_eq!(post.comments.len(), 3);
    assert_eq!(post.comments[1].id, first.id);
    assert_eq!(post.comments[2].id, second.id);
    assert_eq!(second.post_id, pid(1));
}

#[test]
fn test_add_comment_snapshots_author_fields() {
    let mut store = FeedStore::seeded();
    let comment = store
        .add_comment(pid(3), "nice one".to_string(), uid(5))
        .unwrap();

    let author = store.find_user_by_id(uid(5)).unwrap();
    assert_eq!(comment.username, author.username);
    assert_eq!(comment.avatar, author.avatar);
    assert_eq!(comment.likes, 0);
    assert!(!comment.liked);
}

#[test]
fn test_add_comment_unknown_author_fails() {
    let mut store = FeedStore::seeded();
    let err = store
        .add_comment(pid(1), "ghost".to_string(), uid(99))
        .unwrap_err();
    assert!(matches!(err, FeedError::UserNotFound(_)));
}

#[test]
fn test_add_comment_unknown_post_fails() {
    let mut store = FeedStore::seeded();
    let err = store
        .add_comment(pid(999), "lost".to_string(), uid(1))
        .unwrap_err();
    assert!(matches!(err, FeedError::PostNotFound(_)));
}

#[test]
fn test_edit_comment_rewrites_content() {
    let mut store = FeedStore::seeded();
    let edited = store
        .edit_comment(cid(1), "second thoughts".to_string())
        .unwrap();

    assert_eq!(edited.content, "second thoughts");
    assert_eq!(
        store.comment(cid(1)).unwrap().content,
        "second thoughts"
    );
}

#[test]
fn test_edit_comment_unknown_id_fails() {
    let mut store = FeedStore::seeded();
    let err = store
        .edit_comment(cid(999), "into the void".to_string())
        .unwrap_err();
    assert!(matches!(err, FeedError::CommentNotFound(_)));
}

#[test]
fn test_delete_comment_removes_it() {
    let mut store = FeedStore::seeded();
    store.delete_comment(cid(1)).unwrap();

    assert!(store.comment(cid(1)).is_none());
    assert!(store.post(pid(1)).unwrap().comments.is_empty());
}

#[test]
fn test_delete_comment_unknown_id_fails() {
    let mut store = FeedStore::seeded();
    let err = store.delete_comment(cid(999)).unwrap_err();
    assert!(matches!(err, FeedError::CommentNotFound(_)));
}

// =========================================================================
// Profile propagation
// =========================================================================

#[test]
fn test_profile_edit_updates_the_user() {
    let mut store = FeedStore::seeded();
    let updated = store
        .update_user_profile(uid(2), profile("sarah_tracks", "Now with music", "new.jpeg"))
        .unwrap();

    assert_eq!(updated.username, "sarah_tracks");
    assert_eq!(updated.bio.as_deref(), Some("Now with music"));
    assert_eq!(updated.avatar, "new.jpeg");
    assert!(store.find_user_by_username("sarah_jones").is_none());
}

#[test]
fn test_profile_edit_propagates_to_posts_and_comments() {
    let mut store = FeedStore::seeded();
    store
        .update_user_profile(uid(2), profile("sarah_tracks", "Now with music", "new.jpeg"))
        .unwrap();

    for post in store.posts() {
        if post.author_id == uid(2) {
            assert_eq!(post.username, "sarah_tracks", "post {}", post.id);
            assert_eq!(post.avatar, "new.jpeg", "post {}", post.id);
        }
    }
    // Seed comment 1 on post 1 is sarah's.
    let comment = store.comment(cid(1)).unwrap();
    assert_eq!(comment.username, "sarah_tracks");
    assert_eq!(comment.avatar, "new.jpeg");
}

#[test]
fn test_profile_edit_leaves_other_authors_untouched() {
    let mut store = FeedStore::seeded();
    store
        .update_user_profile(uid(2), profile("sarah_tracks", "bio", "new.jpeg"))
        .unwrap();

    let post = store.post(pid(1)).unwrap();
    assert_eq!(post.username, "taharoshaan");
    let comment = store.comment(cid(2)).unwrap();
    assert_eq!(comment.username, "mike_dev");
}

#[test]
fn test_profile_edit_to_taken_username_is_rejected() {
    let mut store = FeedStore::seeded();
    let err = store
        .update_user_profile(uid(2), profile("mike_dev", "bio", "avatar.jpeg"))
        .unwrap_err();

    assert!(matches!(err, FeedError::UsernameTaken(_)));
    // Nothing changed, including the denormalized copies.
    assert_eq!(store.find_user_by_id(uid(2)).unwrap().username, "sarah_jones");
    assert_eq!(store.post(pid(2)).unwrap().username, "sarah_jones");
}

#[test]
fn test_profile_edit_keeping_own_username_is_allowed() {
    let mut store = FeedStore::seeded();
    let updated = store
        .update_user_profile(uid(2), profile("sarah_jones", "fresh bio", "fresh.jpeg"))
        .unwrap();

    assert_eq!(updated.username, "sarah_jones");
    assert_eq!(updated.bio.as_deref(), Some("fresh bio"));
}

#[test]
fn test_profile_edit_unknown_user_fails() {
    let mut store = FeedStore::seeded();
    let err = store
        .update_user_profile(uid(99), profile("whoever", "bio", "avatar.jpeg"))
        .unwrap_err();
    assert!(matches!(err, FeedError::UserNotFound(_)));
}

// =========================================================================
// Leaderboard
// =========================================================================

#[test]
fn test_leaderboard_sorted_by_points_descending() {
    let store = FeedStore::seeded();
    let board = store.leaderboard(10);

    assert_eq!(board.len(), 10);
    assert_eq!(board[0].user.username, "lisa_travel");
    assert_eq!(board[0].points, 2450);
    assert_eq!(board[1].user.username, "alex_tech");
    assert_eq!(board[1].points, 2100);
    assert_eq!(board[9].user.username, "john_music");
    assert_eq!(board[9].points, 890);
}

#[test]
fn test_leaderboard_respects_limit() {
    let store = FeedStore::seeded();
    assert_eq!(board_names(&store, 3), ["lisa_travel", "alex_tech", "emma_design"]);
    assert_eq!(store.leaderboard(0).len(), 0);
    // Asking for more rows than exist returns what there is.
    assert_eq!(store.leaderboard(50).len(), 10);
}

fn board_names(store: &FeedStore, limit: usize) -> Vec<String> {
    store
        .leaderboard(limit)
        .into_iter()
        .map(|e| e.user.username)
        .collect()
}

#[test]
fn test_runtime_accounts_stay_off_the_leaderboard() {
    let mut store = FeedStore::seeded();
    let user = store
        .create_user(new_user("newcomer", "new@example.com"))
        .unwrap();

    assert_eq!(store.user_points(user.id), 0);
    let board = store.leaderboard(50);
    assert_eq!(board.len(), 10);
    assert!(board.iter().all(|e| e.user.id != user.id));
}

#[test]
fn test_user_points_for_seeded_accounts() {
    let store = FeedStore::seeded();
    assert_eq!(store.user_points(uid(1)), 1250);
    assert_eq!(store.user_points(uid(7)), 2450);
    assert_eq!(store.user_points(uid(99)), 0);
}
