use serde::{Deserialize, Serialize};

// ============================================================================
// Address
// ============================================================================

/// Department address as the API returns and accepts it.
///
/// `country` holds the two-letter state code ("UF") entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAddress {
    pub street: String,
    pub neighborhood: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

// ============================================================================
// Read model
// ============================================================================

/// Department record returned by `GET /api/departments/{id}`.
///
/// Unknown keys (`id`, timestamps) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub manager: String,
    pub address: DepartmentAddress,
}

// ============================================================================
// Write model
// ============================================================================

/// Body of `PUT /api/departments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDepartmentDto {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub manager: String,
    pub address: DepartmentAddress,
}

impl From<Department> for UpdateDepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            name: department.name,
            description: department.description,
            phone: department.phone,
            manager: department.manager,
            address: department.address,
        }
    }
}
