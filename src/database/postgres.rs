use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Course, Instructor, NewCourse, NewInstructor};
use crate::database::repository::{CourseRepository, InstructorRepository};

/// `InstructorRepository` over the `instructors` table
pub struct PgInstructorRepository {
    pool: PgPool,
}

impl PgInstructorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstructorRepository for PgInstructorRepository {
    async fn find_all(&self) -> Result<Vec<Instructor>, DatabaseError> {
        let rows = sqlx::query_as::<_, Instructor>("SELECT id, name FROM instructors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Instructor>, DatabaseError> {
        let rows = sqlx::query_as::<_, Instructor>(
            "SELECT id, name FROM instructors WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Instructor>, DatabaseError> {
        let row = sqlx::query_as::<_, Instructor>("SELECT id, name FROM instructors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, instructor: &NewInstructor) -> Result<Instructor, DatabaseError> {
        let row = sqlx::query_as::<_, Instructor>(
            "INSERT INTO instructors (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&instructor.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM instructors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// `CourseRepository` over the `courses` table
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DatabaseError> {
        let rows = sqlx::query_as::<_, Course>(
            "SELECT id, name, category, instructor_id FROM courses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Course>, DatabaseError> {
        // strpos keeps `%` and `_` in the fragment literal, unlike LIKE
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, name, category, instructor_id
            FROM courses
            WHERE strpos(name, $1) > 0
            ORDER BY id
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DatabaseError> {
        let row = sqlx::query_as::<_, Course>(
            "SELECT id, name, category, instructor_id FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, course: &NewCourse) -> Result<Course, DatabaseError> {
        let row = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (name, category, instructor_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, category, instructor_id
            "#,
        )
        .bind(&course.name)
        .bind(&course.category)
        .bind(course.instructor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, course: &Course) -> Result<Course, DatabaseError> {
        let row = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET name = $1, category = $2
            WHERE id = $3
            RETURNING id, name, category, instructor_id
            "#,
        )
        .bind(&course.name)
        .bind(&course.category)
        .bind(course.id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| DatabaseError::NotFound(format!("course {}", course.id)))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
