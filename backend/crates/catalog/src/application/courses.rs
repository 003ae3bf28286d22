//! List Courses Use Case

use std::sync::Arc;

use crate::domain::entities::Course;
use crate::domain::repository::CourseRepository;
use crate::error::CatalogResult;

pub struct ListCoursesUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> ListCoursesUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A blank category means no filter
    pub async fn execute(&self, category: Option<&str>) -> CatalogResult<Vec<Course>> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.repo.list_courses(category).await
    }
}
