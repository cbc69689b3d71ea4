//! Rules for the `.env` file consumed by the compose stack.

use std::collections::BTreeMap;

/// File name of the environment file, relative to the checkout root.
pub const ENV_FILE: &str = ".env";

/// Template names probed in priority order when `.env` is absent.
pub const ENV_TEMPLATES: [&str; 3] = [".env.sample", ".env.example", ".env.default"];

/// Keys the dashboard stack requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKey {
    HostIp,
    NvrUrl,
    AdminUser,
    AdminPassword,
}

impl EnvKey {
    /// Every required key, in the order they are prompted for and written.
    pub const ALL: [EnvKey; 4] =
        [EnvKey::HostIp, EnvKey::NvrUrl, EnvKey::AdminUser, EnvKey::AdminPassword];

    pub fn name(&self) -> &'static str {
        match self {
            EnvKey::HostIp => "HOST_IP",
            EnvKey::NvrUrl => "NVR_URL",
            EnvKey::AdminUser => "ADMIN_USER",
            EnvKey::AdminPassword => "ADMIN_PASSWORD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnvKey::HostIp => "Host bind address",
            EnvKey::NvrUrl => "NVR stream URL",
            EnvKey::AdminUser => "Admin username",
            EnvKey::AdminPassword => "Admin password",
        }
    }

    /// Value substituted for empty input; `None` means the key must be supplied.
    pub fn default_value(&self) -> Option<&'static str> {
        match self {
            EnvKey::HostIp => Some("0.0.0.0"),
            EnvKey::NvrUrl => None,
            EnvKey::AdminUser => Some("admin"),
            EnvKey::AdminPassword => Some("admin"),
        }
    }

    pub fn from_name(name: &str) -> Option<EnvKey> {
        EnvKey::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Render values as `KEY=value` lines: required keys in `EnvKey::ALL` order, then the rest sorted.
pub fn render(values: &BTreeMap<String, String>) -> String {
    let required = EnvKey::ALL
        .iter()
        .filter_map(|key| values.get_key_value(key.name()));
    let extra = values.iter().filter(|(name, _)| EnvKey::from_name(name).is_none());
    required.chain(extra).map(|(name, value)| format!("{name}={value}\n")).collect()
}

/// Parse `KEY=value` lines. Comments, blank lines and lines without `=` are ignored.
pub fn parse(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            values.insert(key.trim().to_string(), value.to_string());
        }
    }
    values
}

/// Parse a `KEY=VALUE` command-line override.
pub fn parse_override(raw: &str) -> Result<(String, String), String> {
    let (key, value) =
        raw.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
