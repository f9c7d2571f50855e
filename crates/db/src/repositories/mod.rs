//! Repository layer: one unit struct of associated functions per table.

pub mod ad_repo;
pub mod comment_repo;
pub mod user_repo;

pub use ad_repo::AdRepo;
pub use comment_repo::CommentRepo;
pub use user_repo::UserRepo;
