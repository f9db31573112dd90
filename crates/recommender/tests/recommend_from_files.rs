//! End-to-end: load both tables from disk and rank against a user.

use std::path::Path;

use recommender::{load_posts_from_csv, load_users_from_csv, recommended_posts, recommended_users};

const USERS: &str = "\
id,username,preferences
1,ab3de,\"Anime, Rock\"
2,xyz12,\"Gaming, Hiking, Go\"
3,q1w2e,\"Manga, K-Pop\"
4,zz9zz,\"ANIME_, ROCK_, Go\"
5,mm1mm,\"Rock, Cooking\"
";

const POSTS: &str = "\
id,title,tags
1,Post: #1: aaaaa's Content,\"Hiking, Cooking\"
2,Post: #2: bbbbb's Content,\"Anime, ROCK_, Music\"
3,Post: #3: ccccc's Content,\"Rock, Go\"
4,Post: #4: ddddd's Content,\"Kpop, Jpop\"
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_recommendations_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let users = load_users_from_csv(&write(dir.path(), "users.csv", USERS)).unwrap();
    let posts = load_posts_from_csv(&write(dir.path(), "posts.csv", POSTS)).unwrap();

    let me = &users[0];

    let user_ids: Vec<u32> = recommended_users(me, &users, 5)
        .iter()
        .map(|r| r.item.id)
        .collect();
    assert_eq!(user_ids, vec![4, 5]);

    let post_ids: Vec<u32> = recommended_posts(me, &posts, 5)
        .iter()
        .map(|r| r.item.id)
        .collect();
    assert_eq!(post_ids, vec![2, 3]);
}

#[test]
fn test_limit_applies_after_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let users = load_users_from_csv(&write(dir.path(), "users.csv", USERS)).unwrap();

    let recs = recommended_users(&users[0], &users, 1);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].item.username, "zz9zz");
    assert_eq!(recs[0].score, 2);
}
