/// Entries of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ViewAll,
    SearchByName,
    DeleteByName,
    SortByMarks,
    UpdateMarks,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddStudent,
        MenuChoice::ViewAll,
        MenuChoice::SearchByName,
        MenuChoice::DeleteByName,
        MenuChoice::SortByMarks,
        MenuChoice::UpdateMarks,
        MenuChoice::SaveAndExit,
    ];

    pub fn from_number(number: i32) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::ViewAll => "View All Students",
            MenuChoice::SearchByName => "Search by Name",
            MenuChoice::DeleteByName => "Delete by Name",
            MenuChoice::SortByMarks => "Sort by Marks",
            MenuChoice::UpdateMarks => "Update Marks",
            MenuChoice::SaveAndExit => "Save and Exit",
        }
    }

    /// Full menu text, header included
    pub fn render_menu() -> String {
        let mut menu = String::from("\n===== Capstone Student Menu =====\n");
        for choice in Self::ALL {
            menu.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
        }
        menu
    }
}
