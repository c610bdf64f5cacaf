use serde::Deserialize;

/// Form body for registration. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub pin: String,
    pub role: String,
}

impl RegisterForm {
    /// Trimmed copy, or `None` if any field is blank after trimming.
    pub fn normalized(&self) -> Option<RegisterForm> {
        let form = RegisterForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            pin: self.pin.trim().to_string(),
            role: self.role.trim().to_string(),
        };
        let complete = [&form.name, &form.email, &form.pin, &form.role]
            .iter()
            .all(|f| !f.is_empty());
        complete.then_some(form)
    }
}

/// Form body for login.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub pin: String,
}
