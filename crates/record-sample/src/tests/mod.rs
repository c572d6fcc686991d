mod console_permissions;
mod draft_outbox;
mod screen;
