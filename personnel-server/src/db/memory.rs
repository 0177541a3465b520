//! In-memory repositories for tests
//!
//! One `MemoryStore` implements every repository trait over plain vectors.
//! `fail_next_insert` makes the insert step of the next assignment fail after
//! the deactivation already happened, so rollback can be observed.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use shared::models::{
    AssignmentKey, Echelon, Employee, EmployeeAssignment, EmployeeAssignmentResponse,
    EmployeeReport, Grade, Position, PositionCreate, Religion, ReligionCreate, Role,
    RolePromotion, Unit, UnitCreate,
};
use uuid::Uuid;

use crate::repository::{
    AssignmentLedger, BlobStore, EmployeeRepository, PositionRepository, ReferenceRepository,
    RepoError, RepoResult, ReportRepository, Repositories, RoleRepository, UnitRepository,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    roles: Vec<Role>,
    edges: Vec<RolePromotion>,
    units: Vec<Unit>,
    positions: Vec<Position>,
    grades: Vec<Grade>,
    religions: Vec<Religion>,
    echelons: Vec<Echelon>,
    assignments: Vec<EmployeeAssignment>,
    next_id: i64,
    clock: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Strictly increasing timestamps keep "most recent" deterministic
    fn tick(&mut self) -> i64 {
        self.clock = self.clock.max(crate::util::now_millis()) + 1;
        self.clock
    }

    fn view(&self, a: &EmployeeAssignment) -> EmployeeAssignmentResponse {
        let employee = self.employees.iter().find(|e| e.id == a.employee_id);
        EmployeeAssignmentResponse {
            employee_id: a.employee_id,
            employee_nip: employee.map(|e| e.nip.clone()).unwrap_or_default(),
            employee_name: employee.map(|e| e.full_name.clone()).unwrap_or_default(),
            unit_id: a.unit_id,
            unit_name: self
                .units
                .iter()
                .find(|u| u.id == a.unit_id)
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            position_id: a.position_id,
            position_name: self
                .positions
                .iter()
                .find(|p| p.id == a.position_id)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            is_active: a.is_active,
            assigned_at: a.assigned_at,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }

    fn report(&self, e: &Employee) -> EmployeeReport {
        let active = self
            .assignments
            .iter()
            .find(|a| a.employee_id == e.id && a.is_active);
        let unit = active.and_then(|a| self.units.iter().find(|u| u.id == a.unit_id));
        let position = active.and_then(|a| self.positions.iter().find(|p| p.id == a.position_id));
        let dash = || "-".to_string();
        EmployeeReport {
            nip: e.nip.clone(),
            full_name: e.full_name.clone(),
            place_of_birth: e.place_of_birth.clone(),
            address: e.address.clone(),
            date_of_birth: e.date_of_birth,
            gender: e.gender.clone(),
            grade: self
                .grades
                .iter()
                .find(|g| g.id == e.grade_id)
                .map(|g| g.code.clone())
                .unwrap_or_default(),
            echelon: self
                .echelons
                .iter()
                .find(|g| g.id == e.echelon_id)
                .map(|g| g.code.clone())
                .unwrap_or_default(),
            position: position.map(|p| p.name.clone()).unwrap_or_else(dash),
            work_location: unit.map(|u| u.address.clone()).unwrap_or_else(dash),
            religion: self
                .religions
                .iter()
                .find(|r| r.id == e.religion_id)
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            unit: unit.map(|u| u.name.clone()).unwrap_or_else(dash),
            phone_number: e.phone_number.clone(),
            npwp: e
                .npwp
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(dash),
            photo_url: e.photo_url.clone(),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    blobs: Mutex<HashMap<String, (Vec<u8>, String)>>,
    fail_insert: AtomicBool,
}

fn role(id: &str, level: i32) -> Role {
    Role {
        id: id.to_string(),
        name: id.to_string(),
        level,
        description: String::new(),
        can_add_role: false,
        can_add_employee: false,
        can_add_unit: false,
        can_add_position: false,
        can_add_echelon: false,
        can_add_religion: false,
        can_add_grade: false,
        can_assign_employee_internal: false,
        can_assign_employee_global: false,
        created_at: 0,
        updated_at: 0,
    }
}

impl MemoryStore {
    /// Store seeded with the built-in roles, their promotion edges and one
    /// grade, religion and echelon.
    pub fn seeded() -> Arc<Self> {
        let store = Self::default();
        {
            let mut t = store.tables.lock();
            let mut adm = role("ADM", 1);
            adm.can_add_role = true;
            adm.can_add_employee = true;
            adm.can_add_unit = true;
            adm.can_add_position = true;
            adm.can_add_echelon = true;
            adm.can_add_religion = true;
            adm.can_add_grade = true;
            adm.can_assign_employee_internal = true;
            adm.can_assign_employee_global = true;
            let mut mgr = role("MGR", 2);
            mgr.can_add_employee = true;
            mgr.can_assign_employee_internal = true;
            t.roles = vec![adm, mgr, role("USR", 3)];
            t.edges = vec![
                RolePromotion::new("ADM", "USR", "MGR"),
                RolePromotion::new("ADM", "MGR", "USR"),
            ];
            let id = t.next_id();
            t.grades.push(Grade {
                id,
                code: "III/a".into(),
                created_at: 0,
                updated_at: 0,
            });
            let id = t.next_id();
            t.echelons.push(Echelon {
                id,
                code: "IV.a".into(),
                created_at: 0,
                updated_at: 0,
            });
            t.religions.push(Religion {
                id: "ISL".into(),
                name: "Islam".into(),
                created_at: 0,
                updated_at: 0,
            });
        }
        Arc::new(store)
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            employees: self.clone(),
            roles: self.clone(),
            units: self.clone(),
            positions: self.clone(),
            references: self.clone(),
            assignments: self.clone(),
            reports: self.clone(),
            blobs: self.clone(),
        }
    }

    pub fn fail_next_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }

    pub fn blank_role(id: &str) -> Role {
        role(id, 9)
    }

    pub fn set_edges(&self, edges: Vec<RolePromotion>) {
        self.tables.lock().edges = edges;
    }

    pub fn grade_id(&self) -> i64 {
        self.tables.lock().grades[0].id
    }

    pub fn echelon_id(&self) -> i64 {
        self.tables.lock().echelons[0].id
    }

    /// Insert an employee directly, bypassing validation
    pub fn add_employee(&self, nip: &str, role_id: &str) -> Employee {
        let mut t = self.tables.lock();
        let employee = Employee {
            id: Uuid::new_v4(),
            role_id: role_id.to_string(),
            nip: nip.to_string(),
            password_hash: crate::util::hash_password("password123").unwrap_or_default(),
            full_name: format!("Pegawai {nip}"),
            place_of_birth: "Bandung".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
            gender: "L".into(),
            phone_number: "0812345678".into(),
            photo_url: "https://cdn.test/default.jpg".into(),
            address: "Jl. Asia Afrika 8".into(),
            npwp: None,
            grade_id: t.grades[0].id,
            religion_id: "ISL".into(),
            echelon_id: t.echelons[0].id,
            created_at: 0,
            updated_at: 0,
        };
        t.employees.push(employee.clone());
        employee
    }

    pub fn add_unit(&self, id: i64, name: &str) -> Unit {
        let mut t = self.tables.lock();
        let unit = Unit {
            id,
            name: name.to_string(),
            address: format!("Jl. {name} No. 1"),
            description: format!("Unit {name}"),
            created_at: 0,
            updated_at: 0,
        };
        t.units.push(unit.clone());
        t.next_id = t.next_id.max(id);
        unit
    }

    pub fn add_position(&self, id: i64, name: &str) -> Position {
        let mut t = self.tables.lock();
        let position = Position {
            id,
            name: name.to_string(),
            created_at: 0,
            updated_at: 0,
        };
        t.positions.push(position.clone());
        t.next_id = t.next_id.max(id);
        position
    }

    /// Raw ledger rows of one employee
    pub fn rows_of(&self, employee_id: Uuid) -> Vec<EmployeeAssignment> {
        self.tables
            .lock()
            .assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn blob(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.blobs.lock().get(key).cloned()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.tables.lock().employees.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Employee>> {
        Ok(self.tables.lock().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_nip(&self, nip: &str) -> RepoResult<Option<Employee>> {
        Ok(self
            .tables
            .lock()
            .employees
            .iter()
            .find(|e| e.nip == nip)
            .cloned())
    }

    async fn search(&self, query: &str) -> RepoResult<Vec<Employee>> {
        let needle = query.to_lowercase();
        Ok(self
            .tables
            .lock()
            .employees
            .iter()
            .filter(|e| e.full_name.to_lowercase().contains(&needle) || e.nip.starts_with(query))
            .cloned()
            .collect())
    }

    async fn find_by_unit(&self, unit_id: i64) -> RepoResult<Vec<Employee>> {
        let t = self.tables.lock();
        Ok(t.employees
            .iter()
            .filter(|e| {
                t.assignments
                    .iter()
                    .any(|a| a.employee_id == e.id && a.is_active && a.unit_id == unit_id)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, employee: &Employee) -> RepoResult<()> {
        let mut t = self.tables.lock();
        if t.employees.iter().any(|e| e.nip == employee.nip) {
            return Err(RepoError::Duplicate("employees_nip_key".into()));
        }
        t.employees.push(employee.clone());
        Ok(())
    }

    async fn update_profile(&self, employee: &Employee) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        let Some(row) = t.employees.iter_mut().find(|e| e.id == employee.id) else {
            return Ok(false);
        };
        let (role_id, nip, hash, photo) = (
            row.role_id.clone(),
            row.nip.clone(),
            row.password_hash.clone(),
            row.photo_url.clone(),
        );
        *row = employee.clone();
        row.role_id = role_id;
        row.nip = nip;
        row.password_hash = hash;
        row.photo_url = photo;
        Ok(true)
    }

    async fn update_role(&self, id: Uuid, role_id: &str, now: i64) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        let Some(row) = t.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        row.role_id = role_id.to_string();
        row.updated_at = now;
        Ok(true)
    }

    async fn update_photo_url(&self, id: Uuid, url: &str, now: i64) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        let Some(row) = t.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        row.photo_url = url.to_string();
        row.updated_at = now;
        Ok(true)
    }
}

#[async_trait]
impl RoleRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Role>> {
        Ok(self.tables.lock().roles.clone())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Role>> {
        Ok(self.tables.lock().roles.iter().find(|r| r.id == id).cloned())
    }

    async fn find_promotion_edges(
        &self,
        promoter_role_id: &str,
    ) -> RepoResult<Vec<RolePromotion>> {
        Ok(self
            .tables
            .lock()
            .edges
            .iter()
            .filter(|e| e.promoter_role_id == promoter_role_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UnitRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Unit>> {
        Ok(self.tables.lock().units.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Unit>> {
        Ok(self.tables.lock().units.iter().find(|u| u.id == id).cloned())
    }

    async fn search(&self, query: &str) -> RepoResult<Vec<Unit>> {
        let needle = query.to_lowercase();
        Ok(self
            .tables
            .lock()
            .units
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &UnitCreate, now: i64) -> RepoResult<Unit> {
        let mut t = self.tables.lock();
        let unit = Unit {
            id: t.next_id(),
            name: data.name.clone(),
            address: data.address.clone(),
            description: data.description.clone(),
            created_at: now,
            updated_at: now,
        };
        t.units.push(unit.clone());
        Ok(unit)
    }

    async fn update(&self, unit: &Unit) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        let Some(row) = t.units.iter_mut().find(|u| u.id == unit.id) else {
            return Ok(false);
        };
        *row = unit.clone();
        Ok(true)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        if t.assignments.iter().any(|a| a.unit_id == id) {
            return Err(RepoError::InUse("employee_assignments_unit_id_fkey".into()));
        }
        let before = t.units.len();
        t.units.retain(|u| u.id != id);
        Ok(t.units.len() < before)
    }
}

#[async_trait]
impl PositionRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Position>> {
        Ok(self.tables.lock().positions.clone())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Position>> {
        Ok(self
            .tables
            .lock()
            .positions
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Position>> {
        Ok(self
            .tables
            .lock()
            .positions
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn search(&self, query: &str) -> RepoResult<Vec<Position>> {
        let needle = query.to_lowercase();
        Ok(self
            .tables
            .lock()
            .positions
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create(&self, data: &PositionCreate, now: i64) -> RepoResult<Position> {
        let mut t = self.tables.lock();
        let position = Position {
            id: t.next_id(),
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        t.positions.push(position.clone());
        Ok(position)
    }

    async fn update(&self, position: &Position) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        let Some(row) = t.positions.iter_mut().find(|p| p.id == position.id) else {
            return Ok(false);
        };
        *row = position.clone();
        Ok(true)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        if t.assignments.iter().any(|a| a.position_id == id) {
            return Err(RepoError::InUse("employee_assignments_position_id_fkey".into()));
        }
        let before = t.positions.len();
        t.positions.retain(|p| p.id != id);
        Ok(t.positions.len() < before)
    }
}

#[async_trait]
impl ReferenceRepository for MemoryStore {
    async fn list_grades(&self) -> RepoResult<Vec<Grade>> {
        Ok(self.tables.lock().grades.clone())
    }

    async fn find_grade(&self, id: i64) -> RepoResult<Option<Grade>> {
        Ok(self.tables.lock().grades.iter().find(|g| g.id == id).cloned())
    }

    async fn create_grade(&self, code: &str, now: i64) -> RepoResult<Grade> {
        let mut t = self.tables.lock();
        if t.grades.iter().any(|g| g.code == code) {
            return Err(RepoError::Duplicate("grades_code_key".into()));
        }
        let grade = Grade {
            id: t.next_id(),
            code: code.to_string(),
            created_at: now,
            updated_at: now,
        };
        t.grades.push(grade.clone());
        Ok(grade)
    }

    async fn update_grade(&self, id: i64, code: &str, now: i64) -> RepoResult<Option<Grade>> {
        let mut t = self.tables.lock();
        if t.grades.iter().any(|g| g.code == code && g.id != id) {
            return Err(RepoError::Duplicate("grades_code_key".into()));
        }
        Ok(t.grades.iter_mut().find(|g| g.id == id).map(|g| {
            g.code = code.to_string();
            g.updated_at = now;
            g.clone()
        }))
    }

    async fn delete_grade(&self, id: i64) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        if t.employees.iter().any(|e| e.grade_id == id) {
            return Err(RepoError::InUse("employees_grade_id_fkey".into()));
        }
        let before = t.grades.len();
        t.grades.retain(|g| g.id != id);
        Ok(t.grades.len() < before)
    }

    async fn list_religions(&self) -> RepoResult<Vec<Religion>> {
        Ok(self.tables.lock().religions.clone())
    }

    async fn find_religion(&self, id: &str) -> RepoResult<Option<Religion>> {
        Ok(self
            .tables
            .lock()
            .religions
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create_religion(&self, data: &ReligionCreate, now: i64) -> RepoResult<Religion> {
        let mut t = self.tables.lock();
        if t.religions.iter().any(|r| r.id == data.id) {
            return Err(RepoError::Duplicate("religions_pkey".into()));
        }
        let religion = Religion {
            id: data.id.clone(),
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        t.religions.push(religion.clone());
        Ok(religion)
    }

    async fn update_religion(
        &self,
        id: &str,
        name: &str,
        now: i64,
    ) -> RepoResult<Option<Religion>> {
        let mut t = self.tables.lock();
        Ok(t.religions.iter_mut().find(|r| r.id == id).map(|r| {
            r.name = name.to_string();
            r.updated_at = now;
            r.clone()
        }))
    }

    async fn delete_religion(&self, id: &str) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        if t.employees.iter().any(|e| e.religion_id == id) {
            return Err(RepoError::InUse("employees_religion_id_fkey".into()));
        }
        let before = t.religions.len();
        t.religions.retain(|r| r.id != id);
        Ok(t.religions.len() < before)
    }

    async fn list_echelons(&self) -> RepoResult<Vec<Echelon>> {
        Ok(self.tables.lock().echelons.clone())
    }

    async fn find_echelon(&self, id: i64) -> RepoResult<Option<Echelon>> {
        Ok(self
            .tables
            .lock()
            .echelons
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create_echelon(&self, code: &str, now: i64) -> RepoResult<Echelon> {
        let mut t = self.tables.lock();
        if t.echelons.iter().any(|e| e.code == code) {
            return Err(RepoError::Duplicate("echelons_code_key".into()));
        }
        let echelon = Echelon {
            id: t.next_id(),
            code: code.to_string(),
            created_at: now,
            updated_at: now,
        };
        t.echelons.push(echelon.clone());
        Ok(echelon)
    }

    async fn update_echelon(&self, id: i64, code: &str, now: i64) -> RepoResult<Option<Echelon>> {
        let mut t = self.tables.lock();
        if t.echelons.iter().any(|e| e.code == code && e.id != id) {
            return Err(RepoError::Duplicate("echelons_code_key".into()));
        }
        Ok(t.echelons.iter_mut().find(|e| e.id == id).map(|e| {
            e.code = code.to_string();
            e.updated_at = now;
            e.clone()
        }))
    }

    async fn delete_echelon(&self, id: i64) -> RepoResult<bool> {
        let mut t = self.tables.lock();
        if t.employees.iter().any(|e| e.echelon_id == id) {
            return Err(RepoError::InUse("employees_echelon_id_fkey".into()));
        }
        let before = t.echelons.len();
        t.echelons.retain(|e| e.id != id);
        Ok(t.echelons.len() < before)
    }
}

#[async_trait]
impl AssignmentLedger for MemoryStore {
    async fn transactional_assign(&self, key: AssignmentKey) -> RepoResult<()> {
        let mut t = self.tables.lock();
        if !t.employees.iter().any(|e| e.id == key.employee_id) {
            return Err(RepoError::InUse("employee_assignments_employee_id_fkey".into()));
        }
        let snapshot = t.assignments.clone();
        let now = t.tick();

        for row in t
            .assignments
            .iter_mut()
            .filter(|a| a.employee_id == key.employee_id && a.is_active)
        {
            row.is_active = false;
            row.updated_at = now;
        }

        let existing = t.assignments.iter_mut().find(|a| {
            a.employee_id == key.employee_id
                && a.unit_id == key.unit_id
                && a.position_id == key.position_id
        });
        match existing {
            Some(row) => {
                row.is_active = true;
                row.assigned_at = now;
                row.updated_at = now;
            }
            None => {
                if self.fail_insert.swap(false, Ordering::SeqCst) {
                    t.assignments = snapshot;
                    return Err(RepoError::Database("simulated insert failure".into()));
                }
                t.assignments.push(EmployeeAssignment {
                    employee_id: key.employee_id,
                    unit_id: key.unit_id,
                    position_id: key.position_id,
                    is_active: true,
                    assigned_at: now,
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        Ok(())
    }

    async fn deactivate(&self, key: AssignmentKey) -> RepoResult<()> {
        let mut t = self.tables.lock();
        let now = t.tick();
        if let Some(row) = t.assignments.iter_mut().find(|a| {
            a.employee_id == key.employee_id
                && a.unit_id == key.unit_id
                && a.position_id == key.position_id
        }) {
            row.is_active = false;
            row.updated_at = now;
        }
        Ok(())
    }

    async fn find_all(&self) -> RepoResult<Vec<EmployeeAssignmentResponse>> {
        let t = self.tables.lock();
        Ok(t.assignments.iter().map(|a| t.view(a)).collect())
    }

    async fn find_by_employee_id(
        &self,
        employee_id: Uuid,
    ) -> RepoResult<Option<EmployeeAssignmentResponse>> {
        let t = self.tables.lock();
        Ok(t.assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .max_by_key(|a| (a.is_active, a.assigned_at))
            .map(|a| t.view(a)))
    }

    async fn find_by_unit_id(&self, unit_id: i64) -> RepoResult<Vec<EmployeeAssignmentResponse>> {
        let t = self.tables.lock();
        Ok(t.assignments
            .iter()
            .filter(|a| a.unit_id == unit_id)
            .map(|a| t.view(a))
            .collect())
    }

    async fn find_by_composite_key(
        &self,
        key: AssignmentKey,
    ) -> RepoResult<Option<EmployeeAssignmentResponse>> {
        let t = self.tables.lock();
        Ok(t.assignments
            .iter()
            .filter(|a| {
                a.employee_id == key.employee_id
                    && a.unit_id == key.unit_id
                    && a.position_id == key.position_id
            })
            .max_by_key(|a| (a.is_active, a.assigned_at))
            .map(|a| t.view(a)))
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn report_all(&self) -> RepoResult<Vec<EmployeeReport>> {
        let t = self.tables.lock();
        Ok(t.employees.iter().map(|e| t.report(e)).collect())
    }

    async fn report_by_nip(&self, nip: &str) -> RepoResult<Option<EmployeeReport>> {
        let t = self.tables.lock();
        Ok(t.employees.iter().find(|e| e.nip == nip).map(|e| t.report(e)))
    }

    async fn report_by_unit(&self, unit_id: i64) -> RepoResult<Vec<EmployeeReport>> {
        let t = self.tables.lock();
        Ok(t.employees
            .iter()
            .filter(|e| {
                t.assignments
                    .iter()
                    .any(|a| a.employee_id == e.id && a.is_active && a.unit_id == unit_id)
            })
            .map(|e| t.report(e))
            .collect())
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BoxError> {
        self.blobs
            .lock()
            .insert(key.to_string(), (bytes, content_type.to_string()));
        Ok(format!("https://cdn.test/{key}"))
    }
}
