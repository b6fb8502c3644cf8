//! Email format with TLD allow-list and disposable-domain deny-list.

use std::sync::LazyLock;

use regex::Regex;

use vetform_rules::EmailPolicy;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").expect("email pattern compiles")
});

pub fn check(value: &str, policy: &EmailPolicy, label: &str) -> Option<String> {
    if !EMAIL.is_match(value) {
        return Some(format!("{label} is not a valid email address"));
    }
    let Some((_, domain)) = value.split_once('@') else {
        return Some(format!("{label} is not a valid email address"));
    };
    let domain = domain.to_ascii_lowercase();
    // Subdomains of a denied provider are denied too, on dot boundaries
    // only, so "notmailinator.com" stays clean.
    if policy.disposable_domains.iter().any(|deny| {
        let deny = deny.to_ascii_lowercase();
        domain == deny || domain.ends_with(&format!(".{deny}"))
    }) {
        return Some(format!("{label} uses a disposable email provider"));
    }
    // The pattern guarantees at least one dot in the domain.
    let tld = domain.rsplit('.').next().unwrap_or("");
    if !policy
        .allowed_tlds
        .iter()
        .any(|allow| allow.eq_ignore_ascii_case(tld))
    {
        return Some(format!("{label} has an unsupported top-level domain"));
    }
    None
}
