use crate::backend::domain::models::student::StudentRecord;
use shared::StudentInfo;

/// Mapper from domain student records to the read-only `StudentInfo` DTO.
pub struct StudentMapper;

impl StudentMapper {
    pub fn to_dto(domain: &StudentRecord) -> StudentInfo {
        StudentInfo {
            roll_number: domain.roll_number(),
            name: domain.name().to_string(),
            email: domain.email().to_string(),
            course: domain.course().to_string(),
            marks: domain.marks(),
            grade: domain.grade(),
        }
    }

    pub fn to_dto_list(domain_students: &[StudentRecord]) -> Vec<StudentInfo> {
        domain_students.iter().map(Self::to_dto).collect()
    }
}
