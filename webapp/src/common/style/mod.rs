use constcat::concat;

mod components;
mod layout;
mod variables;

pub use components::BASE_COMPONENTS;
pub use layout::LAYOUT;
pub use variables::CSS_VARIABLES;

// everything the page needs, in one style element
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.load-error {
  margin: var(--space-16) auto;
  max-width: 600px;
  color: var(--error);
  text-align: center;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LAYOUT
);
