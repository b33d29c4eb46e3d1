use crate::domain::model::Student;
use crate::utils::error::RegistryError;
use std::collections::HashMap;

pub const MIN_GRADE: i32 = 0;
pub const MAX_GRADE: i32 = 100;

/// In-memory student store keyed by id.
#[derive(Debug, Default)]
pub struct Registry {
    students: HashMap<u32, Student>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn add_student(&mut self, student: Student) -> Result<(), RegistryError> {
        if self.students.contains_key(&student.id) {
            return Err(RegistryError::DuplicateStudent { id: student.id });
        }

        tracing::debug!(id = student.id, name = %student.name, "registering student");
        self.students.insert(student.id, student);
        Ok(())
    }

    pub fn get_student(&self, id: u32) -> Result<&Student, RegistryError> {
        self.students
            .get(&id)
            .ok_or(RegistryError::StudentNotFound { id })
    }

    /// Argument checks run before the lookup, so a bad grade is reported even
    /// for an unknown student.
    pub fn update_grade(
        &mut self,
        student_id: u32,
        subject: &str,
        grade: i32,
    ) -> Result<(), RegistryError> {
        if subject.trim().is_empty() {
            return Err(RegistryError::EmptySubject);
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(RegistryError::GradeOutOfRange { grade });
        }

        let student = self
            .students
            .get_mut(&student_id)
            .ok_or(RegistryError::StudentNotFound { id: student_id })?;
        student.grades.insert(subject.to_string(), grade as u8);
        Ok(())
    }
}
