//! Desktop entry record.
//!
//! One logical record is rendered once per run and written to three
//! locations (menu, autostart, local copy). The copies must stay textually
//! identical; re-rendering all of them every run is the only synchronization.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

const ENTRY_TEMPLATE: &str = include_str!("../assets/desktop_entry.j2");

/// The desktop-shell descriptor for the installed application.
///
/// Field order in the rendered output is fixed by the template.
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    /// Display name shown in menus.
    pub name: String,
    /// One-line description.
    pub comment: String,
    /// Absolute path of the installed executable.
    pub exec: String,
    /// Absolute path of the installed icon.
    pub icon: String,
    /// Whether the application runs in a terminal.
    pub terminal: bool,
    /// Menu category tags, semicolon-joined in the output.
    pub categories: Vec<String>,
    /// Value of the autostart-enable flag.
    pub autostart_enabled: bool,
}

#[derive(Serialize)]
struct EntryContext<'a> {
    name: &'a str,
    comment: &'a str,
    exec: &'a str,
    icon: &'a str,
    terminal: &'a str,
    categories: String,
    autostart: &'a str,
}

impl DesktopEntry {
    /// Render the record into its on-disk text form.
    pub fn render(&self) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let context = EntryContext {
            name: &self.name,
            comment: &self.comment,
            exec: &self.exec,
            icon: &self.icon,
            terminal: if self.terminal { "true" } else { "false" },
            categories: self.categories.join(";"),
            autostart: if self.autostart_enabled { "true" } else { "false" },
        };

        Ok(env.render_str(ENTRY_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> DesktopEntry {
        DesktopEntry {
            name: "VPN Monitor".to_string(),
            comment: "Monitors VPN connection status from the system tray".to_string(),
            exec: "/work/vpn-monitor".to_string(),
            icon: "/home/user/.local/share/icons/vpn-monitor.png".to_string(),
            terminal: false,
            categories: vec!["Network".to_string(), "Utility".to_string()],
            autostart_enabled: true,
        }
    }

    #[test]
    fn renders_fields_in_fixed_order() {
        let rendered = entry().render().unwrap();
        let expected = "[Desktop Entry]\n\
                        Version=1.0\n\
                        Type=Application\n\
                        Name=VPN Monitor\n\
                        Comment=Monitors VPN connection status from the system tray\n\
                        Exec=/work/vpn-monitor\n\
                        Icon=/home/user/.local/share/icons/vpn-monitor.png\n\
                        Terminal=false\n\
                        Categories=Network;Utility;\n\
                        X-GNOME-Autostart-enabled=true\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn categories_keep_a_trailing_semicolon() {
        let mut e = entry();
        e.categories = vec!["Network".to_string()];
        let rendered = e.render().unwrap();
        assert!(rendered.contains("Categories=Network;\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let e = entry();
        assert_eq!(e.render().unwrap(), e.render().unwrap());
    }

    #[test]
    fn autostart_flag_follows_the_record() {
        let mut e = entry();
        e.autostart_enabled = false;
        assert!(e.render().unwrap().contains("X-GNOME-Autostart-enabled=false\n"));
    }
}
