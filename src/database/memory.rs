use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Course, Instructor, NewCourse, NewInstructor};
use crate::database::repository::{CourseRepository, InstructorRepository};

#[derive(Default)]
struct Tables {
    instructors: BTreeMap<i32, Instructor>,
    courses: BTreeMap<i32, Course>,
    last_instructor_id: i32,
    last_course_id: i32,
}

/// Process-local store implementing both repositories.
///
/// Ids are assigned from 1 upwards per table, and the course → instructor
/// foreign key is enforced the way the PostgreSQL schema enforces it.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InstructorRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Instructor>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.instructors.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Instructor>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .instructors
            .values()
            .filter(|i| i.name == name)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Instructor>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.instructors.get(&id).cloned())
    }

    async fn insert(&self, instructor: &NewInstructor) -> Result<Instructor, DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.last_instructor_id += 1;
        let row = Instructor {
            id: tables.last_instructor_id,
            name: instructor.name.clone(),
        };
        tables.instructors.insert(row.id, row.clone());
        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.instructors.contains_key(&id) {
            return Ok(false);
        }
        if tables.courses.values().any(|c| c.instructor_id == id) {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "instructor {} is still referenced from table \"courses\"",
                id
            )));
        }
        tables.instructors.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Course>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.courses.values().cloned().collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Course>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .values()
            .filter(|c| c.name.contains(fragment))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.courses.get(&id).cloned())
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, DatabaseError> {
        let mut tables = self.tables.write().await;
        if !tables.instructors.contains_key(&course.instructor_id) {
            return Err(DatabaseError::ForeignKeyViolation(format!(
                "instructor {} is not present in table \"instructors\"",
                course.instructor_id
            )));
        }
        tables.last_course_id += 1;
        let row = Course {
            id: tables.last_course_id,
            name: course.name.clone(),
            category: course.category.clone(),
            instructor_id: course.instructor_id,
        };
        tables.courses.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, course: &Course) -> Result<Course, DatabaseError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .courses
            .get_mut(&course.id)
            .ok_or_else(|| DatabaseError::NotFound(format!("course {}", course.id)))?;
        row.name = course.name.clone();
        row.category = course.category.clone();
        Ok(row.clone())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let mut tables = self.tables.write().await;
        Ok(tables.courses.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{course_entity_list, instructor_entity_list};

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryStore::new();
        let first = InstructorRepository::insert(&store, &NewInstructor::new("a")).await.unwrap();
        let second = InstructorRepository::insert(&store, &NewInstructor::new("b")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn find_by_name_is_exact() {
        let store = MemoryStore::new();
        for instructor in instructor_entity_list() {
            InstructorRepository::insert(&store, &instructor).await.unwrap();
        }

        assert_eq!(store.find_by_name("Ofir Nahshoni").await.unwrap().len(), 2);
        assert_eq!(store.find_by_name("Ofir").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn find_by_name_containing_counts() {
        let store = MemoryStore::new();
        let instructor = InstructorRepository::insert(&store, &NewInstructor::new("Ofir Nahshoni"))
            .await
            .unwrap();
        for course in course_entity_list(&instructor) {
            CourseRepository::insert(&store, &course).await.unwrap();
        }

        for (fragment, expected) in [("Spring", 2), ("Services", 2), ("Docker", 1), ("spring", 0)] {
            let found = store.find_by_name_containing(fragment).await.unwrap();
            assert_eq!(found.len(), expected, "fragment {:?}", fragment);
        }
    }

    #[tokio::test]
    async fn course_insert_requires_instructor() {
        let store = MemoryStore::new();
        let orphan = NewCourse {
            name: "Orphan".to_string(),
            category: "Design".to_string(),
            instructor_id: 42,
        };

        let err = CourseRepository::insert(&store, &orphan).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)));
        assert!(CourseRepository::find_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn instructor_delete_blocked_by_courses() {
        let store = MemoryStore::new();
        let instructor = InstructorRepository::insert(&store, &NewInstructor::new("Ofir Nahshoni"))
            .await
            .unwrap();
        let course = NewCourse::for_instructor("Kotlin & Spring", "Development", &instructor);
        CourseRepository::insert(&store, &course).await.unwrap();

        let err = InstructorRepository::delete_by_id(&store, instructor.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ForeignKeyViolation(_)));
        assert!(InstructorRepository::find_by_id(&store, instructor.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_missing_course_is_not_found() {
        let store = MemoryStore::new();
        let ghost = Course {
            id: 7,
            name: "x".to_string(),
            category: "y".to_string(),
            instructor_id: 1,
        };
        assert!(matches!(
            store.update(&ghost).await,
            Err(DatabaseError::NotFound(_))
        ));
    }
}
