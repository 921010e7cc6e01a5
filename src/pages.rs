//! Server-rendered HTML for the management UI. The pages are plain
//! forms and tables; the only script on any page drives the scan view.

use crate::api::attendance::DayRecord;
use crate::model::employee::Employee;
use actix_web::{http::header, HttpResponse};

/// 302 redirect, the navigation primitive for every form flow.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title} - Rollcall</title>
<style>
body {{ font-family: sans-serif; margin: 2em; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #999; padding: 0.4em 0.8em; }}
.warning {{ color: #a00; }}
nav a {{ margin-right: 1em; }}
img.thumb {{ max-height: 48px; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body
    )
}

pub fn login(warning: Option<&str>) -> String {
    let notice = warning
        .map(|w| format!(r#"<p class="warning">{}</p>"#, escape(w)))
        .unwrap_or_default();

    layout(
        "Login",
        &format!(
            r#"<h1>Login</h1>
{notice}
<form method="post" action="/login">
  <p><label>Username <input name="username" required></label></p>
  <p><label>Password <input name="password" type="password" required></label></p>
  <p><button type="submit">Log in</button></p>
</form>"#
        ),
    )
}

fn nav(username: &str) -> String {
    format!(
        r#"<nav>
<a href="/">Employees</a>
<a href="/add">Add employee</a>
<a href="/attendance_scan">Scan</a>
<a href="/attendance_dashboard">Dashboard</a>
<a href="/logout">Logout ({})</a>
</nav>"#,
        escape(username)
    )
}

pub fn index(username: &str, employees: &[Employee]) -> String {
    let mut rows = String::new();
    for e in employees {
        let photo = if e.photo.is_empty() {
            String::new()
        } else {
            format!(
                r#"<img class="thumb" src="/uploads/{0}" alt="{0}">"#,
                escape(&e.photo)
            )
        };
        rows.push_str(&format!(
            r#"<tr>
  <td>{id}</td><td>{name}</td><td>{username}</td><td>{email}</td>
  <td>{password}</td><td>{city}</td><td>{photo}</td>
  <td><img class="thumb" src="/qrcodes/{qr}" alt="qr"></td>
  <td><a href="/edit/{id}">edit</a> <a href="/delete/{id}">delete</a></td>
</tr>
"#,
            id = e.id,
            name = escape(&e.name),
            username = escape(&e.username),
            email = escape(&e.email),
            password = escape(&e.password),
            city = escape(&e.city),
            photo = photo,
            qr = escape(&crate::utils::qr::artifact_filename(&e.name, e.id)),
        ));
    }

    layout(
        "Employees",
        &format!(
            r#"{nav}
<h1>Employees</h1>
<table>
<tr><th>Id</th><th>Name</th><th>Username</th><th>Email</th><th>Password</th><th>City</th><th>Photo</th><th>QR</th><th></th></tr>
{rows}
</table>"#,
            nav = nav(username),
        ),
    )
}

/// Shared add/edit form; `existing` pre-fills the fields for edit.
pub fn employee_form(username: &str, action: &str, existing: Option<&Employee>) -> String {
    let field = |name: &str| {
        existing
            .map(|e| match name {
                "name" => escape(&e.name),
                "username" => escape(&e.username),
                "email" => escape(&e.email),
                "password" => escape(&e.password),
                "city" => escape(&e.city),
                _ => String::new(),
            })
            .unwrap_or_default()
    };

    let title = if existing.is_some() {
        "Edit employee"
    } else {
        "Add employee"
    };

    let current_photo = existing
        .filter(|e| !e.photo.is_empty())
        .map(|e| {
            format!(
                r#"<p>Current photo: <img class="thumb" src="/uploads/{0}" alt="{0}"></p>"#,
                escape(&e.photo)
            )
        })
        .unwrap_or_default();

    layout(
        title,
        &format!(
            r#"{nav}
<h1>{title}</h1>
<form method="post" action="{action}" enctype="multipart/form-data">
  <p><label>Name <input name="name" value="{name}" required></label></p>
  <p><label>Username <input name="username" value="{username_v}" required></label></p>
  <p><label>Email <input name="email" type="email" value="{email}" required></label></p>
  <p><label>Password <input name="password" value="{password}" required></label></p>
  <p><label>City <input name="city" value="{city}" required></label></p>
  {current_photo}
  <p><label>Photo <input name="photo" type="file"></label></p>
  <p><button type="submit">Save</button></p>
</form>"#,
            nav = nav(username),
            action = escape(action),
            name = field("name"),
            username_v = field("username"),
            email = field("email"),
            password = field("password"),
            city = field("city"),
        ),
    )
}

pub fn scan(username: &str) -> String {
    layout(
        "Attendance scan",
        &format!(
            r#"{nav}
<h1>Attendance scan</h1>
<p>Enter or scan the employee id from their QR badge.</p>
<form id="scan-form">
  <p><label>Employee id <input id="employee-id" type="number" required></label></p>
  <p><button type="submit">Mark attendance</button></p>
</form>
<p id="result"></p>
<script>
document.getElementById('scan-form').addEventListener('submit', async (ev) => {{
  ev.preventDefault();
  const id = parseInt(document.getElementById('employee-id').value, 10);
  const resp = await fetch('/mark_attendance', {{
    method: 'POST',
    headers: {{ 'Content-Type': 'application/json' }},
    body: JSON.stringify({{ employee_id: id }})
  }});
  const data = await resp.json();
  document.getElementById('result').textContent = data.status + ': ' + data.message;
}});
</script>"#,
            nav = nav(username),
        ),
    )
}

pub fn dashboard(
    username: &str,
    present: i64,
    absent: i64,
    total: i64,
    records: &[DayRecord],
) -> String {
    let mut rows = String::new();
    for r in records {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&r.name),
            r.date,
            escape(r.sign_in.as_deref().unwrap_or("-")),
            escape(r.sign_out.as_deref().unwrap_or("-")),
        ));
    }

    layout(
        "Attendance dashboard",
        &format!(
            r#"{nav}
<h1>Today's attendance</h1>
<p>
Present: <span id="present">{present}</span>
Absent: <span id="absent">{absent}</span>
Total: <span id="total">{total}</span>
</p>
<table>
<tr><th>Name</th><th>Date</th><th>Sign in</th><th>Sign out</th></tr>
{rows}
</table>"#,
            nav = nav(username),
        ),
    )
}
