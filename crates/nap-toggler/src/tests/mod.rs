mod feedback_timer;
mod logging;
mod menu_ids;
mod notifier;
