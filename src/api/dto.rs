//! Transfer objects: the JSON shapes exchanged at the HTTP boundary

use serde::{Deserialize, Deserializer, Serialize};

use crate::database::models::{Course, Instructor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default)]
    pub instructor_id: Option<i32>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: Some(course.id),
            name: course.name,
            category: course.category,
            instructor_id: Some(course.instructor_id),
        }
    }
}

/// Body of `PUT /v1/courses/:id`. Only name and category can change;
/// any `id` or `instructorId` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateCourseDto {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl From<Instructor> for InstructorDto {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: Some(instructor.id),
            name: instructor.name,
        }
    }
}

/// Explicit `null` on a string field reads as blank so it reaches validation
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseQuery {
    pub course_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstructorQuery {
    pub instructor_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_dto_uses_camel_case() {
        let dto = CourseDto::from(Course {
            id: 3,
            name: "Kotlin & Spring".to_string(),
            category: "Development".to_string(),
            instructor_id: 1,
        });
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"id": 3, "name": "Kotlin & Spring", "category": "Development", "instructorId": 1})
        );
    }

    #[test]
    fn missing_fields_deserialize_as_blank() {
        let dto: CourseDto = serde_json::from_value(json!({"name": null, "instructorId": null})).unwrap();
        assert_eq!(dto, CourseDto::default());
    }

    #[test]
    fn update_body_ignores_extra_fields() {
        let dto: UpdateCourseDto = serde_json::from_value(json!({
            "id": 55,
            "name": "Part 2 - Micro Services & Kafka Architecture",
            "category": "Development",
            "instructorId": 9
        }))
        .unwrap();
        assert_eq!(dto.name, "Part 2 - Micro Services & Kafka Architecture");
        assert_eq!(dto.category, "Development");
    }
}
