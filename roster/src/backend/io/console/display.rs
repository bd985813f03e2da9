use shared::{format_marks, StudentInfo};

pub const SEPARATOR: &str = "---------------------------------";

/// Multi-line block describing one student
pub fn render_student(student: &StudentInfo) -> String {
    format!(
        "Roll No : {}\nName    : {}\nEmail   : {}\nCourse  : {}\nMarks   : {}\nGrade   : {}\n",
        student.roll_number,
        student.name,
        student.email,
        student.course,
        format_marks(student.marks),
        student.grade,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Grade;

    #[test]
    fn test_render_student() {
        let student = StudentInfo {
            roll_number: 101,
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            course: "CompSci".to_string(),
            marks: 92.0,
            grade: Grade::A,
        };

        assert_eq!(
            render_student(&student),
            "Roll No : 101\n\
             Name    : Asha Rao\n\
             Email   : asha@example.com\n\
             Course  : CompSci\n\
             Marks   : 92.0\n\
             Grade   : A\n"
        );
    }
}
