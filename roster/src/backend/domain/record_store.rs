use log::{debug, info, warn};
use std::path::Path;

use super::error::{LookupKey, RosterError, RosterResult};
use super::models::student::StudentRecord;
use crate::backend::storage::StudentRepository;

/// The in-memory roster.
///
/// Records keep insertion order (which is also the order they are saved in)
/// until [`RecordStore::sort_by_marks_descending`] reorders them.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student, rejecting a roll number that is already on the roster
    pub fn add(&mut self, student: StudentRecord) -> RosterResult<()> {
        if self.find_by_roll(student.roll_number()).is_some() {
            warn!("Rejected duplicate roll number {}", student.roll_number());
            return Err(RosterError::DuplicateKey(student.roll_number()));
        }

        info!("Adding student {} ({})", student.roll_number(), student.name());
        self.students.push(student);
        Ok(())
    }

    /// Remove every student whose name matches, ignoring case.
    /// Returns how many were removed.
    pub fn delete_by_name(&mut self, name: &str) -> RosterResult<usize> {
        let before = self.students.len();
        self.students.retain(|s| !s.name_matches(name));
        let removed = before - self.students.len();

        if removed == 0 {
            warn!("No student to delete with name: {}", name);
            return Err(RosterError::NotFound(LookupKey::Name(name.to_string())));
        }

        info!("Deleted {} student(s) named {}", removed, name);
        Ok(removed)
    }

    /// First student (in current order) whose name matches, ignoring case
    pub fn search_by_name(&self, name: &str) -> RosterResult<&StudentRecord> {
        self.students
            .iter()
            .find(|s| s.name_matches(name))
            .ok_or_else(|| RosterError::NotFound(LookupKey::Name(name.to_string())))
    }

    pub fn find_by_roll(&self, roll_number: i32) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.roll_number() == roll_number)
    }

    pub fn list_all(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Highest marks first. The sort is stable, so students with equal marks
    /// keep their relative order.
    pub fn sort_by_marks_descending(&mut self) {
        self.students.sort_by(|a, b| b.marks().total_cmp(&a.marks()));
        debug!("Sorted {} students by marks", self.students.len());
    }

    /// Update a student's marks; the grade follows immediately.
    /// The 0-100 range is the caller's responsibility.
    pub fn set_marks(&mut self, roll_number: i32, marks: f64) -> RosterResult<&StudentRecord> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.roll_number() == roll_number)
            .ok_or(RosterError::NotFound(LookupKey::RollNumber(roll_number)))?;

        student.set_marks(marks);
        info!(
            "Set marks for {} to {} (grade {})",
            roll_number,
            marks,
            student.grade()
        );
        Ok(&*student)
    }

    /// Append every record stored at `path`.
    ///
    /// A missing file is not an error and loads nothing. If any line is
    /// malformed the whole load fails and the roster is left untouched.
    /// Returns the number of records loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> RosterResult<usize> {
        let repository = StudentRepository::new(path);
        let Some(loaded) = repository.read_all()? else {
            return Ok(0);
        };

        let count = loaded.len();
        self.students.extend(loaded);
        info!("Loaded {} records from {:?}", count, repository.path());
        Ok(count)
    }

    /// Overwrite `path` with the current roster, in current order
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RosterResult<()> {
        StudentRepository::new(path).write_all(&self.students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Grade;
    use std::fs;
    use tempfile::TempDir;

    fn student(roll: i32, name: &str, marks: f64) -> StudentRecord {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        StudentRecord::new(roll, name, email, "CompSci", marks)
    }

    fn rolls(store: &RecordStore) -> Vec<i32> {
        store.list_all().iter().map(|s| s.roll_number()).collect()
    }

    #[test]
    fn test_add_then_search() {
        let mut store = RecordStore::new();
        store.add(student(101, "Asha Rao", 91.5)).unwrap();
        store.add(student(102, "Ben Ode", 64.0)).unwrap();

        let found = store.search_by_name("Asha Rao").expect("student should be found");
        assert_eq!(found.roll_number(), 101);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_duplicate_roll_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        store.add(student(101, "Asha Rao", 91.5)).unwrap();
        let before = store.list_all().to_vec();

        let result = store.add(student(101, "Someone Else", 20.0));
        assert!(matches!(result, Err(RosterError::DuplicateKey(101))));
        assert_eq!(store.list_all(), before.as_slice());
    }

    #[test]
    fn test_search_is_case_insensitive_and_returns_first() {
        let mut store = RecordStore::new();
        store.add(student(1, "Sam", 40.0)).unwrap();
        store.add(student(2, "SAM", 80.0)).unwrap();

        assert_eq!(store.search_by_name("sam").unwrap().roll_number(), 1);
    }

    #[test]
    fn test_search_missing_name() {
        let mut store = RecordStore::new();
        store.add(student(1, "Sam", 40.0)).unwrap();

        match store.search_by_name("Alex") {
            Err(RosterError::NotFound(LookupKey::Name(name))) => assert_eq!(name, "Alex"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_removes_every_match() {
        let mut store = RecordStore::new();
        store.add(student(1, "Sam", 40.0)).unwrap();
        store.add(student(2, "Kai", 55.0)).unwrap();
        store.add(student(3, "sam", 70.0)).unwrap();

        assert_eq!(store.delete_by_name("SAM").unwrap(), 2);
        assert_eq!(rolls(&store), vec![2]);
    }

    #[test]
    fn test_delete_missing_name_leaves_store_unchanged() {
        let mut store = RecordStore::new();
        store.add(student(1, "Sam", 40.0)).unwrap();
        store.add(student(2, "Kai", 55.0)).unwrap();

        assert!(matches!(store.delete_by_name("Alex"), Err(RosterError::NotFound(_))));
        assert_eq!(rolls(&store), vec![1, 2]);
    }

    #[test]
    fn test_list_all_on_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_sort_keeps_tied_students_in_order() {
        let mut store = RecordStore::new();
        store.add(student(101, "A", 92.0)).unwrap();
        store.add(student(102, "B", 92.0)).unwrap();
        store.add(student(103, "C", 40.0)).unwrap();

        store.sort_by_marks_descending();
        assert_eq!(rolls(&store), vec![101, 102, 103]);
    }

    #[test]
    fn test_sort_orders_marks_descending() {
        let mut store = RecordStore::new();
        let marks = [55.0, 91.0, 12.5, 70.0, 91.0, 88.0, 12.5, 100.0];
        for (i, m) in marks.iter().enumerate() {
            store.add(student(i as i32, "S", *m)).unwrap();
        }

        store.sort_by_marks_descending();

        let sorted = store.list_all();
        for pair in sorted.windows(2) {
            assert!(pair[0].marks() >= pair[1].marks());
        }
        // ties: roll 1 before 4 (91.0), roll 2 before 6 (12.5)
        assert_eq!(rolls(&store), vec![7, 1, 4, 5, 3, 0, 2, 6]);
    }

    #[test]
    fn test_set_marks_updates_grade() {
        let mut store = RecordStore::new();
        store.add(student(5, "Ravi", 60.0)).unwrap();
        assert_eq!(store.find_by_roll(5).unwrap().grade(), Grade::C);

        let updated = store.set_marks(5, 90.0).unwrap();
        assert_eq!(updated.grade(), Grade::A);
        assert_eq!(store.find_by_roll(5).unwrap().marks(), 90.0);
        assert_eq!(store.find_by_roll(5).unwrap().grade(), Grade::A);
    }

    #[test]
    fn test_set_marks_unknown_roll() {
        let mut store = RecordStore::new();
        assert!(matches!(
            store.set_marks(9, 50.0),
            Err(RosterError::NotFound(LookupKey::RollNumber(9)))
        ));
    }

    #[test]
    fn test_load_nonexistent_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::new();

        let loaded = store.load(temp_dir.path().join("nonexistent.txt")).unwrap();
        assert_eq!(loaded, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.txt");

        let mut store = RecordStore::new();
        store.add(student(103, "Chen Li", 49.25)).unwrap();
        store.add(student(101, "Asha Rao", 91.5)).unwrap();
        store.add(student(102, "Ben Ode", 64.0)).unwrap();
        store.save(&path).unwrap();

        let mut reloaded = RecordStore::new();
        assert_eq!(reloaded.load(&path).unwrap(), 3);
        assert_eq!(reloaded.list_all(), store.list_all());
    }

    #[test]
    fn test_save_after_sort_persists_sorted_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.txt");

        let mut store = RecordStore::new();
        store.add(student(1, "Low", 30.0)).unwrap();
        store.add(student(2, "High", 95.0)).unwrap();
        store.sort_by_marks_descending();
        store.save(&path).unwrap();

        let mut reloaded = RecordStore::new();
        reloaded.load(&path).unwrap();
        assert_eq!(rolls(&reloaded), vec![2, 1]);
    }

    #[test]
    fn test_corrupt_load_leaves_store_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.txt");
        fs::write(&path, "1|A|a@x|CS|50\n2|B|b@x|CS|oops\n3|C|c@x|CS|70\n").unwrap();

        let mut store = RecordStore::new();
        store.add(student(9, "Existing", 80.0)).unwrap();

        assert!(matches!(store.load(&path), Err(RosterError::CorruptData { line: 2, .. })));
        assert_eq!(rolls(&store), vec![9]);
    }

    #[test]
    fn test_load_appends_to_existing_roster() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.txt");
        fs::write(&path, "1|A|a@x|CS|50\n").unwrap();

        let mut store = RecordStore::new();
        store.add(student(9, "Existing", 80.0)).unwrap();
        store.load(&path).unwrap();

        assert_eq!(rolls(&store), vec![9, 1]);
    }

    #[test]
    fn test_failed_save_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("taken");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inner"), "x").unwrap();

        let mut store = RecordStore::new();
        store.add(student(1, "A", 50.0)).unwrap();

        assert!(matches!(store.save(&target), Err(RosterError::Io { .. })));
        assert_eq!(rolls(&store), vec![1]);
    }
}
