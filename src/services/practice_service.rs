use once_cell::sync::Lazy;

use crate::{
    constants::practice_catalog::PRACTICE_CATALOG,
    errors::{AppError, AppResult},
    models::domain::{
        practice::exercise_path, NavigationTarget, PracticeCategory, PracticeExercise,
    },
};

static CATEGORIES: Lazy<Vec<PracticeCategory>> = Lazy::new(|| {
    PRACTICE_CATALOG
        .iter()
        .map(|(key, title, exercises)| PracticeCategory {
            key: key.to_string(),
            title: title.to_string(),
            exercises: exercises
                .iter()
                .map(|(id, exercise_title, description)| PracticeExercise {
                    id: id.to_string(),
                    title: exercise_title.to_string(),
                    description: description.to_string(),
                    path: exercise_path(key, id),
                })
                .collect(),
        })
        .collect()
});

/// Read-only view over the static practice catalogue.
#[derive(Clone, Copy, Default)]
pub struct PracticeService;

impl PracticeService {
    pub fn new() -> Self {
        Self
    }

    /// Categories in display order.
    pub fn categories(&self) -> &'static [PracticeCategory] {
        CATEGORIES.as_slice()
    }

    pub fn category(&self, key: &str) -> Option<&'static PracticeCategory> {
        self.categories().iter().find(|c| c.key == key)
    }

    /// Resolves the page the front end navigates to when an exercise is clicked.
    pub fn dispatch(&self, exercise_id: &str) -> AppResult<NavigationTarget> {
        let target = self
            .categories()
            .iter()
            .find_map(|category| {
                category
                    .exercises
                    .iter()
                    .find(|e| e.id == exercise_id)
                    .map(|exercise| NavigationTarget {
                        exercise_id: exercise.id.clone(),
                        category_key: category.key.clone(),
                        path: exercise.path.clone(),
                    })
            })
            .ok_or_else(|| {
                AppError::NotFound(format!("Practice exercise '{}' not found", exercise_id))
            })?;

        log::info!("Practice exercise '{}' -> {}", exercise_id, target.path);
        Ok(target)
    }
}
