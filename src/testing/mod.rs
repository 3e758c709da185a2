//! Fixtures shared by unit tests

use crate::api::dto::{CourseDto, InstructorDto};
use crate::database::models::{Instructor, NewCourse, NewInstructor};

pub fn course_entity_list(instructor: &Instructor) -> Vec<NewCourse> {
    vec![
        NewCourse::for_instructor("Kotlin & SpringBoot", "Development", instructor),
        NewCourse::for_instructor("SpringBoot Services & Docker", "Development", instructor),
        NewCourse::for_instructor("Micro Services Architecture", "Design", instructor),
    ]
}

pub fn instructor_entity_list() -> Vec<NewInstructor> {
    vec![
        NewInstructor::new("Ofir Nahshoni"),
        NewInstructor::new("Ofir the First"),
        NewInstructor::new("Ofir Nahshoni"),
        NewInstructor::new("Ofifir"),
    ]
}

pub fn course_dto(instructor_id: Option<i32>) -> CourseDto {
    CourseDto {
        id: None,
        name: "Micro Services & Kafka Architecture".to_string(),
        category: "Design".to_string(),
        instructor_id,
    }
}

pub fn instructor_dto(name: &str) -> InstructorDto {
    InstructorDto {
        id: None,
        name: name.to_string(),
    }
}
