//! Server-rendered HTML pages.

use std::fmt::Write as _;

use axum::response::Html;
use entity::department;
use products_hr::{
    EmployeeRow, Page,
    reports::{DepartmentSummary, KpiSnapshot},
};

/// Escapes text for element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} · HR</title>\n</head>\n<body>\n\
         <nav><a href=\"/dashboard\">Dashboard</a> | <a href=\"/dashboard-full\">KPIs</a> | \
         <a href=\"/employees\">Employees</a> | <a href=\"/employees/by-department\">By department</a> | \
         <a href=\"/employees/department-summary\">Department summary</a></nav>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape(title),
    ))
}

pub fn dashboard(kpi: &KpiSnapshot) -> Html<String> {
    let body = format!(
        "<dl>\n<dt>Total employees</dt><dd>{}</dd>\n\
         <dt>Active employees</dt><dd>{}</dd>\n\
         <dt>Total payroll</dt><dd>{}</dd>\n\
         <dt>Average salary</dt><dd>{}</dd>\n</dl>\n",
        kpi.total_employees,
        kpi.active_employees,
        money(kpi.total_payroll),
        money(kpi.average_salary),
    );
    layout("Dashboard", &body)
}

pub fn dashboard_full(kpi: &KpiSnapshot) -> Html<String> {
    let body = format!(
        "<dl>\n<dt>Total employees</dt><dd>{}</dd>\n\
         <dt>Active employees</dt><dd>{}</dd>\n\
         <dt>Inactive employees</dt><dd>{}</dd>\n\
         <dt>Total payroll</dt><dd>{}</dd>\n\
         <dt>Average salary</dt><dd>{}</dd>\n\
         <dt>Departments</dt><dd>{}</dd>\n</dl>\n",
        kpi.total_employees,
        kpi.active_employees,
        kpi.inactive_employees,
        money(kpi.total_payroll),
        money(kpi.average_salary),
        kpi.departments_count,
    );
    layout("Workforce KPIs", &body)
}

/// Where a listing page lives and which filter it carries across links.
pub struct ListingLinks<'a> {
    pub path: &'a str,
    pub department_id: Option<i32>,
}

impl ListingLinks<'_> {
    fn href(&self, page: u64, page_size: u64) -> String {
        let mut href = format!("{}?page={page}&pageSize={page_size}", self.path);
        if let Some(id) = self.department_id {
            let _ = write!(href, "&departmentId={id}");
        }
        escape(&href)
    }
}

pub fn employee_list(
    title: &str,
    page: &Page<EmployeeRow>,
    links: &ListingLinks<'_>,
    departments: Option<&[department::Model]>,
) -> Html<String> {
    let mut body = String::new();

    if let Some(departments) = departments {
        body.push_str(
            "<form method=\"get\" action=\"/employees/by-department\">\n\
             <select name=\"departmentId\">\n<option value=\"\">All departments</option>\n",
        );
        for dept in departments {
            let selected = if links.department_id == Some(dept.id) {
                " selected"
            } else {
                ""
            };
            let _ = writeln!(
                body,
                "<option value=\"{}\"{selected}>{}</option>",
                dept.id,
                escape(&dept.name)
            );
        }
        let _ = writeln!(
            body,
            "</select>\n<input type=\"hidden\" name=\"pageSize\" value=\"{}\">\n\
             <button type=\"submit\">Filter</button>\n</form>",
            page.page_size
        );
    }

    let _ = writeln!(
        body,
        "<p>{} employees · page {} of {}</p>",
        page.total_count, page.page, page.total_pages
    );

    if page.items.is_empty() {
        body.push_str("<p>No employees found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Name</th><th>Email</th><th>Phone</th>\
             <th>Department</th><th>Salary</th><th>Hired</th><th></th></tr></thead>\n<tbody>\n",
        );
        for row in &page.items {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td><form method=\"post\" action=\"/employees/increase-salary?id={}&amp;version={}\">\
                 <button type=\"submit\">Raise</button></form></td></tr>",
                escape(&row.full_name),
                escape(&row.email),
                escape(&row.phone),
                escape(row.department.as_deref().unwrap_or("")),
                money(row.base_salary),
                row.hire_date,
                row.id,
                row.version,
            );
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<nav class=\"pager\">");
    if page.has_previous() {
        let _ = write!(
            body,
            "<a href=\"{}\">Previous</a> ",
            links.href(page.page - 1, page.page_size)
        );
    }
    if page.has_next() {
        let _ = write!(
            body,
            "<a href=\"{}\">Next</a>",
            links.href(page.page + 1, page.page_size)
        );
    }
    body.push_str("</nav>\n");

    layout(title, &body)
}

pub fn department_summary(rows: &[DepartmentSummary]) -> Html<String> {
    let mut body = String::from(
        "<table>\n<thead><tr><th>Department</th><th>Employees</th>\
         <th>Average salary</th><th>Total salary</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.department),
            row.total_employees,
            money(row.average_salary),
            money(row.total_salary),
        );
    }
    body.push_str("</tbody>\n</table>\n");
    layout("Department summary", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">O'Neil & Co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#39;Neil &amp; Co&lt;/a&gt;"
        );
    }

    #[test]
    fn pager_links_keep_department_filter() {
        let links = ListingLinks {
            path: "/employees/by-department",
            department_id: Some(3),
        };
        assert_eq!(
            links.href(2, 25),
            "/employees/by-department?page=2&amp;pageSize=25&amp;departmentId=3"
        );
    }
}
