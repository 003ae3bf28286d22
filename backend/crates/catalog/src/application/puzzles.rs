//! Puzzle Use Cases

use std::sync::Arc;

use kernel::id::PuzzleId;

use crate::domain::drafts::PuzzleDraft;
use crate::domain::entities::Puzzle;
use crate::domain::repository::PuzzleRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct ListPuzzlesUseCase<R>
where
    R: PuzzleRepository,
{
    repo: Arc<R>,
}

impl<R> ListPuzzlesUseCase<R>
where
    R: PuzzleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A blank category means no filter
    pub async fn execute(&self, category: Option<&str>) -> CatalogResult<Vec<Puzzle>> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.repo.list_puzzles(category).await
    }
}

pub struct CreatePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: PuzzleDraft) -> CatalogResult<Puzzle> {
        let new_puzzle = draft.validate()?;
        let puzzle = self.repo.create_puzzle(&new_puzzle).await?;

        tracing::info!(puzzle_id = %puzzle.id, category = %puzzle.category, "Puzzle created");

        Ok(puzzle)
    }
}

pub struct DeletePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: PuzzleId) -> CatalogResult<()> {
        if !self.repo.delete_puzzle(id).await? {
            return Err(CatalogError::PuzzleNotFound);
        }

        tracing::info!(puzzle_id = %id, "Puzzle deleted");
        Ok(())
    }
}
