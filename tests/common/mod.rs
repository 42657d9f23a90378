//! Shared fixtures for scanner integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a file below `root`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, content).expect("Failed to write fixture file");
}

/// Creates a small help-desk project laid out like the default content globs expect
pub fn create_help_desk_project() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write_file(
        root,
        "templates/base.html",
        r#"<!doctype html>
<html>
  <body class="bg-gray-50 text-gray-900">
    <nav class="bg-help-blue text-white p-4">Help Desk</nav>
    {% block content %}{% endblock %}
  </body>
</html>
"#,
    );

    write_file(
        root,
        "tickets/templates/tickets/list.html",
        r#"{% for ticket in tickets %}
  <tr class="hover:bg-help-blue/10">
    {% if ticket.status == 'open' %}
      <span class="text-help-green font-semibold">Open</span>
    {% else %}
      <span class="text-help-gray">Closed</span>
    {% endif %}
  </tr>
{% endfor %}
"#,
    );

    write_file(
        root,
        "static/js/tickets.js",
        r#"const badge = document.querySelector('#priority');
if (priority === 'urgent') {
  badge.classList.add('bg-help-red', 'ring-2', 'ring-help-red/50');
}
"#,
    );

    // Outside every default content glob
    write_file(
        root,
        "docs/notes.html",
        r#"<p class="bg-help-yellow">draft</p>"#,
    );
    write_file(
        root,
        "accounts/models.py",
        r#"CSS = "bg-help-yellow""#,
    );

    temp_dir
}
