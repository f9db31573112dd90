//! Loading the users and posts tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::errors::RecommendError;
use crate::models::{Post, PostRecord, User, UserRecord};

/// Default location of the users table, relative to the working directory.
pub const DEFAULT_USERS_PATH: &str = "data/users.csv";

/// Default location of the posts table, relative to the working directory.
pub const DEFAULT_POSTS_PATH: &str = "data/posts.csv";

/// Loads every user from a CSV file with an `id,username,preferences` header.
pub fn load_users_from_csv(path: &Path) -> Result<Vec<User>, RecommendError> {
    let users = read_records::<UserRecord, User>(File::open(path)?)?;
    info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Loads every post from a CSV file with an `id,title,tags` header.
pub fn load_posts_from_csv(path: &Path) -> Result<Vec<Post>, RecommendError> {
    let posts = read_records::<PostRecord, Post>(File::open(path)?)?;
    info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Deserializes each row as `R` and converts it to `T`, keeping file order.
pub fn read_records<R, T>(source: impl Read) -> Result<Vec<T>, RecommendError>
where
    R: DeserializeOwned,
    T: From<R>,
{
    let mut reader = csv::Reader::from_reader(source);

    reader
        .deserialize::<R>()
        .map(|result| result.map(T::from).map_err(RecommendError::from))
        .collect()
}
