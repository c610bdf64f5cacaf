//! Server-rendered HTML pages. Every interpolated value goes through [`escape`].

use std::fmt::Write;

use crate::profiles::repo_types::ProfileFields;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | CreatorHub</title>\n</head>\n<body>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn error_block(error: Option<&str>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

fn text_input(out: &mut String, label: &str, name: &str, value: &str) {
    let _ = writeln!(
        out,
        "<label>{label}<input type=\"text\" name=\"{name}\" value=\"{value}\"></label>",
        label = escape(label),
        name = name,
        value = escape(value),
    );
}

pub fn index() -> String {
    layout(
        "Welcome",
        "<h1>CreatorHub</h1>\n\
         <p>Connect content creators with editors.</p>\n\
         <p><a href=\"/login\">Log in</a> or <a href=\"/register\">create an account</a>.</p>",
    )
}

pub fn register_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Register</h1>\n{error}\
         <form method=\"post\" action=\"/register\">\n\
         <label>Name<input type=\"text\" name=\"name\" required></label>\n\
         <label>Email<input type=\"email\" name=\"email\" required></label>\n\
         <label>PIN<input type=\"password\" name=\"pin\" inputmode=\"numeric\" required></label>\n\
         <label>Role<input type=\"text\" name=\"role\" list=\"roles\" required></label>\n\
         <datalist id=\"roles\"><option value=\"Content Creator\"><option value=\"Editor\"></datalist>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Log in</a></p>",
        error = error_block(error),
    );
    layout("Register", &body)
}

pub fn login_page(error: Option<&str>) -> String {
    let body = format!(
        "<h1>Log in</h1>\n{error}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Email<input type=\"email\" name=\"email\" required></label>\n\
         <label>PIN<input type=\"password\" name=\"pin\" inputmode=\"numeric\" required></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p>New here? <a href=\"/register\">Register</a></p>",
        error = error_block(error),
    );
    layout("Log in", &body)
}

pub fn home_page(name: &str, email: &str, role: &str) -> String {
    let body = format!(
        "<h1>Welcome, {name}!</h1>\n\
         <p>Email: {email}</p>\n\
         <p>Role: {role}</p>\n\
         <nav><a href=\"/profile\">Edit profile</a> | <a href=\"/logout\">Log out</a></nav>",
        name = escape(name),
        email = escape(email),
        role = escape(role),
    );
    layout("Dashboard", &body)
}

pub fn profile_page(role: &str, profile: Option<&ProfileFields>) -> String {
    let empty = ProfileFields::default();
    let p = profile.unwrap_or(&empty);

    let mut body = format!("<h1>Your profile</h1>\n<p>Role: {}</p>\n", escape(role));
    if profile.is_none() {
        body.push_str("<p>You have not filled in your profile yet.</p>\n");
    }
    body.push_str("<form method=\"post\" action=\"/profile\">\n");
    let _ = writeln!(
        body,
        "<label>Bio<textarea name=\"bio\">{}</textarea></label>",
        escape(&p.bio)
    );
    text_input(&mut body, "Skills", "skills", &p.skills);
    text_input(&mut body, "Experience level", "experience", &p.experience_level);
    text_input(&mut body, "Rate per video", "rate", &p.rate_per_video);
    text_input(&mut body, "Budget range", "budget", &p.budget_range);
    text_input(&mut body, "Niche", "niche", &p.niche);
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    body.push_str("<nav><a href=\"/home\">Dashboard</a> | <a href=\"/logout\">Log out</a></nav>");

    layout("Profile", &body)
}

pub fn internal_error() -> String {
    layout("Error", "<h1>Internal Server Error</h1>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn form_pages_render_escaped_error() {
        let page = login_page(Some("<bad>"));
        assert!(page.contains("&lt;bad&gt;"));
        assert!(!page.contains("<bad>"));
        assert!(!register_page(None).contains("class=\"error\""));
    }

    #[test]
    fn profile_page_prefills_stored_values() {
        let fields = ProfileFields {
            bio: "hi \"there\"".into(),
            niche: "tech".into(),
            ..Default::default()
        };
        let page = profile_page("Editor", Some(&fields));
        assert!(page.contains("hi &quot;there&quot;"));
        assert!(page.contains("name=\"niche\" value=\"tech\""));
        assert!(!page.contains("not filled in"));
        assert!(profile_page("Editor", None).contains("not filled in"));
    }
}
