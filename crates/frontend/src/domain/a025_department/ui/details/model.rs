//! Department Edit - Model Layer
//!
//! Flat form state bound to the inputs, and the two pure mappings between it
//! and the nested API shapes.

use contracts::domain::a025_department::aggregate::{
    Department, DepartmentAddress, UpdateDepartmentDto,
};

pub const PHONE_PATTERN: &str = r"\d{10,11}";
pub const ZIP_CODE_PATTERN: &str = r"\d{5}-?\d{3}";
pub const STATE_CODE_MAX_LEN: &str = "2";

/// One editable field of the department form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Description,
    Phone,
    Manager,
    Street,
    Neighborhood,
    Number,
    ZipCode,
    City,
    StateCode,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Name,
        FormField::Description,
        FormField::Phone,
        FormField::Manager,
        FormField::Street,
        FormField::Neighborhood,
        FormField::Number,
        FormField::ZipCode,
        FormField::City,
        FormField::StateCode,
    ];

    /// Address columns in the order they appear in the address table
    pub const ADDRESS: [FormField; 6] = [
        FormField::Street,
        FormField::Neighborhood,
        FormField::Number,
        FormField::ZipCode,
        FormField::City,
        FormField::StateCode,
    ];

    /// Value of the `name` attribute on the rendered input
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "nome",
            FormField::Description => "descricao",
            FormField::Phone => "telefone",
            FormField::Manager => "gerente",
            FormField::Street => "rua",
            FormField::Neighborhood => "bairro",
            FormField::Number => "numero",
            FormField::ZipCode => "cep",
            FormField::City => "cidade",
            FormField::StateCode => "uf",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.input_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nome",
            FormField::Description => "Descrição",
            FormField::Phone => "Telefone",
            FormField::Manager => "Gerente Responsável",
            FormField::Street => "Rua",
            FormField::Neighborhood => "Bairro",
            FormField::Number => "Número",
            FormField::ZipCode => "CEP",
            FormField::City => "Cidade",
            FormField::StateCode => "UF",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Digite o nome do departamento",
            FormField::Description => "Descreva o departamento",
            FormField::Phone => "11999999999",
            FormField::Manager => "Nome do gerente",
            FormField::ZipCode => "00000-000",
            other => other.label(),
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Phone => "tel",
            _ => "text",
        }
    }

    /// Native `pattern` hint; the browser enforces it, nothing else does
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            FormField::Phone => Some(PHONE_PATTERN),
            FormField::ZipCode => Some(ZIP_CODE_PATTERN),
            _ => None,
        }
    }

    pub fn max_length(self) -> Option<&'static str> {
        match self {
            FormField::StateCode => Some(STATE_CODE_MAX_LEN),
            _ => None,
        }
    }
}

/// Flat, editable mirror of a department record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    pub name: String,
    pub description: String,
    pub phone: String,
    pub manager: String,
    pub street: String,
    pub neighborhood: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
    pub state_code: String,
}

impl DepartmentForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Phone => &self.phone,
            FormField::Manager => &self.manager,
            FormField::Street => &self.street,
            FormField::Neighborhood => &self.neighborhood,
            FormField::Number => &self.number,
            FormField::ZipCode => &self.zip_code,
            FormField::City => &self.city,
            FormField::StateCode => &self.state_code,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Phone => &mut self.phone,
            FormField::Manager => &mut self.manager,
            FormField::Street => &mut self.street,
            FormField::Neighborhood => &mut self.neighborhood,
            FormField::Number => &mut self.number,
            FormField::ZipCode => &mut self.zip_code,
            FormField::City => &mut self.city,
            FormField::StateCode => &mut self.state_code,
        }
    }

    /// Replace a single field, all others stay as they are
    pub fn set(&mut self, field: FormField, value: String) {
        *self.field_mut(field) = value;
    }

    /// Apply an input event keyed by the input's `name` attribute.
    /// Returns false for names that are not part of the form.
    pub fn set_by_name(&mut self, name: &str, value: String) -> bool {
        match FormField::from_input_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }
}

/// Flatten the API record into form state
pub fn to_form_state(record: Department) -> DepartmentForm {
    DepartmentForm {
        name: record.name,
        description: record.description,
        phone: record.phone,
        manager: record.manager,
        street: record.address.street,
        neighborhood: record.address.neighborhood,
        number: record.address.number,
        zip_code: record.address.zip_code,
        city: record.address.city,
        // API stores the UF under `country`
        state_code: record.address.country,
    }
}

/// Nest the form state back into the update payload
pub fn to_payload(form: &DepartmentForm) -> UpdateDepartmentDto {
    UpdateDepartmentDto {
        name: form.name.clone(),
        description: form.description.clone(),
        phone: form.phone.clone(),
        manager: form.manager.clone(),
        address: DepartmentAddress {
            street: form.street.clone(),
            neighborhood: form.neighborhood.clone(),
            number: form.number.clone(),
            zip_code: form.zip_code.clone(),
            city: form.city.clone(),
            country: form.state_code.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Department {
        Department {
            name: "Sales".into(),
            description: "Sells stuff".into(),
            phone: "11999999999".into(),
            manager: "Alice".into(),
            address: DepartmentAddress {
                street: "Main St".into(),
                neighborhood: "Centro".into(),
                number: "10".into(),
                zip_code: "12345-678".into(),
                city: "São Paulo".into(),
                country: "SP".into(),
            },
        }
    }

    #[test]
    fn test_default_form_is_all_empty() {
        let form = DepartmentForm::default();
        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_to_form_state_flattens_address() {
        let form = to_form_state(sample_record());
        assert_eq!(form.name, "Sales");
        assert_eq!(form.description, "Sells stuff");
        assert_eq!(form.phone, "11999999999");
        assert_eq!(form.manager, "Alice");
        assert_eq!(form.street, "Main St");
        assert_eq!(form.neighborhood, "Centro");
        assert_eq!(form.number, "10");
        assert_eq!(form.zip_code, "12345-678");
        assert_eq!(form.city, "São Paulo");
        assert_eq!(form.state_code, "SP");
    }

    #[test]
    fn test_to_payload_maps_state_code_to_country() {
        let mut form = to_form_state(sample_record());
        form.set(FormField::StateCode, "RJ".into());
        form.set(FormField::City, "Niterói".into());

        let payload = to_payload(&form);
        assert_eq!(
            payload.address,
            DepartmentAddress {
                street: "Main St".into(),
                neighborhood: "Centro".into(),
                number: "10".into(),
                zip_code: "12345-678".into(),
                city: "Niterói".into(),
                country: "RJ".into(),
            }
        );
        assert_eq!(payload.name, form.name);
        assert_eq!(payload.phone, form.phone);
    }

    #[test]
    fn test_unedited_round_trip_reproduces_record() {
        let record = sample_record();
        let payload = to_payload(&to_form_state(record.clone()));
        assert_eq!(payload, UpdateDepartmentDto::from(record));
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let before = to_form_state(sample_record());
        for field in FormField::ALL {
            let mut form = before.clone();
            form.set(field, "changed".into());
            for other in FormField::ALL {
                if other == field {
                    assert_eq!(form.get(other), "changed");
                } else {
                    assert_eq!(form.get(other), before.get(other), "{:?} leaked into {:?}", field, other);
                }
            }
        }
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = DepartmentForm::default();
        once.set(FormField::Phone, "11888888888".into());
        let mut twice = once.clone();
        twice.set(FormField::Phone, "11888888888".into());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_by_name_uses_input_names() {
        let mut form = to_form_state(sample_record());
        assert!(form.set_by_name("telefone", "11888888888".into()));
        assert_eq!(form.phone, "11888888888");
        assert!(form.set_by_name("uf", "MG".into()));
        assert_eq!(form.state_code, "MG");
    }

    #[test]
    fn test_set_by_name_ignores_unknown_name() {
        let before = to_form_state(sample_record());
        let mut form = before.clone();
        assert!(!form.set_by_name("country", "BR".into()));
        assert_eq!(form, before);
    }

    #[test]
    fn test_input_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_input_name(field.input_name()), Some(field));
        }
    }

    #[test]
    fn test_input_hints() {
        assert_eq!(FormField::Phone.input_type(), "tel");
        assert_eq!(FormField::Phone.pattern(), Some(r"\d{10,11}"));
        assert_eq!(FormField::ZipCode.pattern(), Some(r"\d{5}-?\d{3}"));
        assert_eq!(FormField::StateCode.max_length(), Some("2"));
        assert_eq!(FormField::Name.pattern(), None);
        assert_eq!(FormField::Street.placeholder(), "Rua");
    }
}
