use log::{debug, error};

use crate::{
    Equipment, EquipmentRepository, EquipmentService, Exercise, ExerciseQuery,
    ExerciseRepository, ExerciseService, ReadError,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: EquipmentRepository + ExerciseRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: EquipmentRepository> EquipmentService for Service<R> {
    async fn search_equipments(&self, name: &str) -> Result<Vec<Equipment>, ReadError> {
        log_on_error!(
            self.repository.search_equipments(name),
            ReadError,
            "search",
            "equipments"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn search_exercises(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.search_exercises(query),
            ReadError,
            "search",
            "exercises"
        )
    }
}
