use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

use super::display::{render_student, SEPARATOR};
use super::loader::ProgressLoader;
use super::menu::MenuChoice;
use crate::backend::domain::models::student::{
    parse_marks, parse_roll_number, require_text, StudentRecord, StudentValidationError,
};
use crate::backend::domain::RosterError;
use crate::backend::io::mappers::StudentMapper;
use crate::backend::{AppState, StartupLoad};

/// Why a single menu action stopped early
#[derive(Debug, thiserror::Error)]
enum ActionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl From<StudentValidationError> for ActionError {
    fn from(err: StudentValidationError) -> Self {
        ActionError::Roster(err.into())
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Saved,
    /// Input ran out before Save and Exit; nothing was written
    EndOfInput,
}

/// Menu-driven session over the roster.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    state: AppState,
    loader: ProgressLoader,
    input_closed: bool,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W, state: AppState, loader: ProgressLoader) -> Self {
        Self {
            input,
            output,
            state,
            loader,
            input_closed: false,
        }
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Run until Save and Exit succeeds or input runs out
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        self.report_startup()?;

        loop {
            write!(self.output, "{}", MenuChoice::render_menu())?;
            let line = self.prompt("Enter choice: ")?;
            if self.input_closed {
                info!("Input closed, ending session without saving");
                return Ok(SessionEnd::EndOfInput);
            }

            let number = match line.trim().parse::<i32>() {
                Ok(number) => number,
                Err(_) => {
                    writeln!(self.output, "Enter valid number!")?;
                    continue;
                }
            };

            self.loader.run(&mut self.output)?;

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };

            debug!("Menu choice: {:?}", choice);
            match self.perform(choice) {
                Ok(true) => return Ok(SessionEnd::Saved),
                Ok(false) => {}
                Err(ActionError::Roster(e)) => writeln!(self.output, "Error: {}", e)?,
                Err(ActionError::Io(e)) => return Err(e),
            }
        }
    }

    fn report_startup(&mut self) -> io::Result<()> {
        match &self.state.startup {
            StartupLoad::NoDataFile => Ok(()),
            StartupLoad::Loaded(count) => {
                writeln!(self.output, "{} records loaded from file.", count)
            }
            StartupLoad::Failed(e) => writeln!(self.output, "Error loading file: {}", e),
        }
    }

    /// Returns `true` once the session should end
    fn perform(&mut self, choice: MenuChoice) -> Result<bool, ActionError> {
        match choice {
            MenuChoice::AddStudent => self.add_student()?,
            MenuChoice::ViewAll => self.view_all()?,
            MenuChoice::SearchByName => self.search_by_name()?,
            MenuChoice::DeleteByName => self.delete_by_name()?,
            MenuChoice::SortByMarks => {
                self.state.store.sort_by_marks_descending();
                writeln!(self.output, "Sorted by marks (descending).")?;
            }
            MenuChoice::UpdateMarks => self.update_marks()?,
            MenuChoice::SaveAndExit => {
                self.save()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn add_student(&mut self) -> Result<(), ActionError> {
        let roll_number = parse_roll_number(&self.prompt("Enter Roll No: ")?)?;
        let name = self.prompt("Enter Name: ")?;
        let email = self.prompt("Enter Email: ")?;
        let course = self.prompt("Enter Course: ")?;
        let marks = self.prompt("Enter Marks: ")?;

        let student = StudentRecord::new(
            roll_number,
            require_text("Name", &name)?,
            require_text("Email", &email)?,
            require_text("Course", &course)?,
            parse_marks(&marks)?,
        );
        self.state.store.add(student)?;
        writeln!(self.output, "Student added successfully!")?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<(), ActionError> {
        let students = StudentMapper::to_dto_list(self.state.store.list_all());
        if students.is_empty() {
            writeln!(self.output, "No student records found.")?;
            return Ok(());
        }

        for student in &students {
            write!(self.output, "{}", render_student(student))?;
            writeln!(self.output, "{}", SEPARATOR)?;
        }
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter name to search: ")?;
        let student = StudentMapper::to_dto(self.state.store.search_by_name(name.trim())?);
        write!(self.output, "{}", render_student(&student))?;
        Ok(())
    }

    fn delete_by_name(&mut self) -> Result<(), ActionError> {
        let name = self.prompt("Enter name to delete: ")?;
        let removed = self.state.store.delete_by_name(name.trim())?;
        if removed > 1 {
            writeln!(self.output, "{} students deleted successfully!", removed)?;
        } else {
            writeln!(self.output, "Student deleted successfully!")?;
        }
        Ok(())
    }

    fn update_marks(&mut self) -> Result<(), ActionError> {
        let roll_number = parse_roll_number(&self.prompt("Enter Roll No: ")?)?;
        let marks = parse_marks(&self.prompt("Enter New Marks: ")?)?;

        let student = StudentMapper::to_dto(self.state.store.set_marks(roll_number, marks)?);
        writeln!(self.output, "Marks updated.")?;
        write!(self.output, "{}", render_student(&student))?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), ActionError> {
        if let Err(e) = self.state.store.save(&self.state.data_file) {
            warn!("Save failed, staying in the menu: {}", e);
            return Err(e.into());
        }
        writeln!(self.output, "Records saved to file.")?;
        writeln!(self.output, "Saved. Exiting...")?;
        Ok(())
    }

    /// Print `text` and read one line. At end of input this returns an empty
    /// string and marks the input as closed.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.input_closed = true;
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
