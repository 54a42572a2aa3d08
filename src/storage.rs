//! In-memory storage for the payroll engine.
//!
//! This module provides [`MemoryStorage`], an ordered registry that owns
//! staff members behind the [`StaffMember`] trait and assigns sequential
//! employee IDs.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::StaffMember;

/// An in-memory registry of staff members keyed by employee ID.
///
/// IDs are assigned sequentially starting from 1 and are never reused.
/// Iteration order follows ascending ID, which matches insertion order.
#[derive(Debug)]
pub struct MemoryStorage {
    employees: BTreeMap<u32, Box<dyn StaffMember>>,
    next_id: u32,
}

impl MemoryStorage {
    /// Creates an empty registry. The first saved member receives ID 1.
    pub fn new() -> Self {
        Self {
            employees: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Saves a staff member, assigning the next sequential employee ID.
    ///
    /// The registry takes ownership of the member and returns the assigned
    /// ID for later lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Developer, Level, StaffMember};
    /// use payroll_engine::storage::MemoryStorage;
    /// use rust_decimal::Decimal;
    ///
    /// let mut storage = MemoryStorage::new();
    /// let dev = Developer::new("John Dev", "IT", Decimal::new(4000, 0), Level::Senior).unwrap();
    ///
    /// let id = storage.save(dev);
    /// assert_eq!(id, 1);
    /// assert_eq!(storage.get(1).unwrap().emp_id(), Some(1));
    /// ```
    pub fn save(&mut self, mut employee: impl StaffMember + 'static) -> u32 {
        let id = self.next_id;
        employee.employee_mut().assign_id(id);
        debug!(emp_id = id, name = %employee.name(), "Saved staff member");
        self.employees.insert(id, Box::new(employee));
        self.next_id += 1;
        id
    }

    /// Looks up a staff member by employee ID.
    pub fn get(&self, id: u32) -> Option<&dyn StaffMember> {
        self.employees.get(&id).map(|member| member.as_ref())
    }

    /// Returns all staff members in ascending employee ID order.
    pub fn list_all(&self) -> impl Iterator<Item = &dyn StaffMember> {
        self.employees.values().map(|member| member.as_ref())
    }

    /// Returns (ID, staff member) pairs in ascending employee ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &dyn StaffMember)> {
        self.employees
            .iter()
            .map(|(id, member)| (*id, member.as_ref()))
    }

    /// Returns the number of registered staff members.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if no staff members are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}
