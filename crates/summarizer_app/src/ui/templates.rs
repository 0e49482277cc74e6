pub const PAGE_TEMPLATE: &str = "page";
const DASHBOARD_PARTIAL: &str = "dashboard";
const TABLE_PARTIAL: &str = "table";

pub const PARTIALS: [(&str, &str); 2] = [(DASHBOARD_PARTIAL, DASHBOARD), (TABLE_PARTIAL, TABLE)];

pub const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{title}}</title>
{{#if auto_refresh}}<meta http-equiv="refresh" content="1">{{/if}}
<style>
body { font-family: system-ui, sans-serif; background: #f9fafb; margin: 0; color: #111827; }
header { background: #fff; border-bottom: 1px solid #e5e7eb; padding: 24px 32px; display: flex; justify-content: space-between; align-items: center; }
main { max-width: 1200px; margin: 0 auto; padding: 32px; }
.notice { background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 8px; padding: 16px; margin-bottom: 32px; }
.banner { padding: 24px; color: #6b7280; }
.banner.error { color: #ef4444; }
.stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 32px; }
.stat { background: #fff; border-radius: 8px; padding: 24px; box-shadow: 0 1px 2px rgba(0,0,0,.08); }
.stat .value { font-size: 1.5rem; font-weight: 600; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 12px 24px; text-align: left; border-bottom: 1px solid #e5e7eb; }
tr.current { background: #fefce8; }
.in-progress { color: #3b82f6; font-size: .85rem; }
.status-icon::before { display: inline-block; width: 1.25em; }
.status-check::before { content: "\2714"; color: #22c55e; }
.status-spinner::before { content: "\21BB"; color: #3b82f6; }
.status-idle::before { content: "\25CB"; color: #9ca3af; }
.placeholder { color: #9ca3af; font-style: italic; }
</style>
</head>
<body>
<header>
  <div>
    <h1>Company Summarizer</h1>
    <p>{{subtitle}}</p>
  </div>
  <div class="actions">
    <form method="post" action="{{action_path}}">
      <button type="submit"{{#if action_disabled}} disabled{{/if}}>{{action_label}}</button>
    </form>
    {{#if reset_path}}
    <form method="post" action="{{reset_path}}">
      <button type="submit"{{#if action_disabled}} disabled{{/if}}>Reset</button>
    </form>
    {{/if}}
  </div>
</header>
<main>
  <div class="notice">
    <h3>{{notice_title}}</h3>
    <p>{{notice_body}}</p>
  </div>
  {{> dashboard}}
  <section class="results">
    <h3>Company Analysis Results</h3>
    {{#if view.loading}}
    <div class="banner loading">Loading companies...</div>
    {{else if view.error}}
    <div class="banner error">Error loading data. Check server or API route.</div>
    {{else}}
    {{> table}}
    {{/if}}
  </section>
  <footer>Rendered {{rendered_at}} &middot; revision {{revision}}</footer>
</main>
</body>
</html>
"#;

const DASHBOARD: &str = r#"<div class="stats">
  <div class="stat"><p>Total Companies</p><p class="value" id="count-total">{{view.counts.total}}</p></div>
  <div class="stat"><p>Completed</p><p class="value" id="count-completed">{{view.counts.completed}}</p></div>
  <div class="stat"><p>Processing</p><p class="value" id="count-processing">{{view.counts.processing}}</p></div>
  <div class="stat"><p>Pending</p><p class="value" id="count-pending">{{view.counts.pending}}</p></div>
</div>
"#;

const TABLE: &str = r#"<table>
  <thead>
    <tr><th>Status</th><th>Company</th><th>Website</th><th>Source</th><th>Summary</th></tr>
  </thead>
  <tbody>
    {{#each view.rows}}
    <tr class="company-row{{#if is_current}} current{{/if}}">
      <td><span class="status-icon status-{{icon}}" title="{{status}}"></span>{{#if is_current}} <span class="in-progress">Summarizing...</span>{{/if}}</td>
      <td>{{#if website_href}}<a href="{{website_href}}" target="_blank" rel="noopener noreferrer">{{name}}</a>{{else}}{{name}}{{/if}}</td>
      <td>{{website}}</td>
      <td>{{source}}</td>
      <td{{#unless has_summary}} class="placeholder"{{/unless}}>{{summary}}</td>
    </tr>
    {{/each}}
  </tbody>
</table>
"#;
