//! Plain-text view templates.

pub(super) const USER: &str = "\
{{ user.name }} <{{ user.email }}>
Role: {{ user.role }}
ID: {{ user.id }}
Avatar: {{ user.avatar }}
";

pub(super) const DASHBOARD: &str = "\
Dashboard
Manage your tasks and projects
{% if user %}
Signed in as {{ user.name }} <{{ user.email }}>
{% endif %}
{% for board in boards %}

[{{ board.id }}] {{ board.title }}
{% if board.description %}
  {{ board.description }}
{% endif %}
  Progress: {{ board.completed_tasks }}/{{ board.total_tasks }} tasks ({{ board.completion_percent }}%)
{% else %}

No boards found
{% endfor %}
";

pub(super) const BOARD: &str = "\
{{ board.title }} [{{ board.id }}]
{% if board.description %}
{{ board.description }}
{% endif %}
Progress: {{ board.completed_tasks }}/{{ board.total_tasks }} tasks ({{ board.completion_percent }}%)
{% for column in columns %}

== {{ column.title }} ({{ column.count }}) ==
{% for task in column.tasks %}
- [{{ task.id }}] {{ task.title }}\
{% if task.due %} (due {{ task.due }}{% if task.overdue %}, overdue{% endif %}){% endif %}\
{% if task.labels %} #{{ task.labels|join(\" #\") }}{% endif %}\
{% if task.hidden_labels %} +{{ task.hidden_labels }}{% endif %}

{% else %}
  (empty)
{% endfor %}
{% endfor %}
";

pub(super) const TASK: &str = "\
{{ task.title }} [{{ task.id }}]
Board: {{ board.title }}
Created on {{ task.created_at }} by {{ task.created_by }}

Description:
  {{ task.description or \"No description provided.\" }}

Status: {{ task.status }}
Due Date: {{ task.due or \"No due date\" }}{% if task.overdue %} (overdue){% endif %}

Assignee: {{ task.assignee or \"Unassigned\" }}
Labels: {% if task.labels %}{{ task.labels|join(\", \") }}{% else %}No labels{% endif %}

";
