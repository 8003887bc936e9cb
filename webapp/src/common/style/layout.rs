pub const LAYOUT: &str = r#"
/* Header and navigation */
.site-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.nav {
  display: flex;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--neutral-100);
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(11, 102, 178, 0.1);
}

.nav-toggle {
  display: none;
  border: none;
  background: none;
  font-size: 1.5rem;
  cursor: pointer;
}

/* Sections */
section {
  padding: var(--space-16) 0;
}

.section-title {
  font-size: 1.75rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.hero {
  background: linear-gradient(135deg, var(--primary-dark), var(--primary-light));
  color: var(--text-inverse);
  text-align: center;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.25rem;
  opacity: 0.9;
  margin-bottom: var(--space-8);
}

.about-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-6);
}

.products {
  background-color: var(--neutral-100);
}

/* Footer */
.site-footer {
  background-color: var(--neutral-900);
  color: var(--neutral-300);
  padding: var(--space-6) 0;
  text-align: center;
  font-size: 0.875rem;
}

/* Narrow viewports collapse the nav behind the toggle */
@media (max-width: 980px) {
  .nav-toggle {
    display: block;
  }

  .nav {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    background-color: var(--surface);
    box-shadow: var(--shadow-md);
    padding: var(--space-2) var(--space-4);
  }

  .nav.open {
    display: flex;
  }

  .hero-title {
    font-size: 2.25rem;
  }
}
"#;
