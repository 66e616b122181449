//! In-memory content store.
//!
//! Used when no `DATABASE_URL` is configured and by the test suite. Ids are
//! assigned from the collection length; since collections are append-only
//! that keeps them unique and monotonically increasing, like the serial
//! columns of the PostgreSQL backend.

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use tokio::sync::RwLock;

use crate::models::portfolio::{
    Assignment, FunAnswer, NewAssignment, NewFunAnswer, NewReflection, NewSkill, Reflection, Skill,
};
use crate::store::ContentStore;

#[derive(Default)]
struct Collections {
    assignments: Vec<Assignment>,
    skills: Vec<Skill>,
    reflections: Vec<Reflection>,
    fun_answers: Vec<FunAnswer>,
}

#[derive(Default)]
pub struct MemContentStore {
    inner: RwLock<Collections>,
}

impl MemContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemContentStore {
    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        let inner = self.inner.read().await;
        let mut assignments = inner.assignments.clone();
        assignments.sort_by_key(|a| (a.module_number, a.id));
        Ok(assignments)
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<Assignment>> {
        let inner = self.inner.read().await;
        Ok(inner.assignments.iter().find(|a| a.id == id).cloned())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        Ok(self.inner.read().await.skills.clone())
    }

    async fn list_reflections(&self) -> Result<Vec<Reflection>> {
        Ok(self.inner.read().await.reflections.clone())
    }

    async fn random_fun_answer(&self) -> Result<Option<FunAnswer>> {
        let inner = self.inner.read().await;
        if inner.fun_answers.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..inner.fun_answers.len());
        Ok(Some(inner.fun_answers[index].clone()))
    }

    async fn create_assignment(&self, new: NewAssignment) -> Result<Assignment> {
        let mut inner = self.inner.write().await;
        let assignment = Assignment {
            id: inner.assignments.len() as i64 + 1,
            title: new.title,
            module_number: new.module_number,
            description: new.description,
            key_learnings: new.key_learnings,
            date: new.date,
            icon: new.icon,
        };
        inner.assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn create_skill(&self, new: NewSkill) -> Result<Skill> {
        new.validate().map_err(anyhow::Error::msg)?;
        let mut inner = self.inner.write().await;
        let skill = Skill {
            id: inner.skills.len() as i64 + 1,
            name: new.name,
            category: new.category,
            level_before: new.level_before,
            level_after: new.level_after,
        };
        inner.skills.push(skill.clone());
        Ok(skill)
    }

    async fn create_reflection(&self, new: NewReflection) -> Result<Reflection> {
        let mut inner = self.inner.write().await;
        let reflection = Reflection {
            id: inner.reflections.len() as i64 + 1,
            topic: new.topic,
            content: new.content,
        };
        inner.reflections.push(reflection.clone());
        Ok(reflection)
    }

    async fn create_fun_answer(&self, new: NewFunAnswer) -> Result<FunAnswer> {
        let mut inner = self.inner.write().await;
        let answer = FunAnswer {
            id: inner.fun_answers.len() as i64 + 1,
            text: new.text,
        };
        inner.fun_answers.push(answer.clone());
        Ok(answer)
    }
}
