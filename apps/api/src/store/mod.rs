//! The content store behind the portfolio API.
//!
//! Handlers depend on the [`ContentStore`] trait, never on a concrete
//! backend. The store is constructed once in `main` and injected through
//! `AppState`; there is no global instance. All collections are append-only:
//! the `create_*` methods exist for the startup seed and nothing else, and
//! no update or delete operation is defined anywhere.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::portfolio::{
    Assignment, FunAnswer, NewAssignment, NewFunAnswer, NewReflection, NewSkill, Reflection, Skill,
};

pub mod memory;
pub mod postgres;
pub mod seed;

pub use memory::MemContentStore;
pub use postgres::PgContentStore;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All assignments, ascending by module number (ties broken by id).
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;

    /// A single assignment, or `None` when the id does not resolve.
    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>>;

    async fn list_skills(&self) -> Result<Vec<Skill>>;

    async fn list_reflections(&self) -> Result<Vec<Reflection>>;

    /// A uniformly random member of the fun-answer set, `None` when empty.
    async fn random_fun_answer(&self) -> Result<Option<FunAnswer>>;

    async fn create_assignment(&self, new: NewAssignment) -> Result<Assignment>;

    /// Rejects levels outside [0, 10].
    async fn create_skill(&self, new: NewSkill) -> Result<Skill>;

    async fn create_reflection(&self, new: NewReflection) -> Result<Reflection>;

    async fn create_fun_answer(&self, new: NewFunAnswer) -> Result<FunAnswer>;
}
