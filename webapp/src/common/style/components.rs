pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--primary);
  color: var(--primary);
  font-weight: 700;
}

.btn-outline:hover {
  background-color: rgba(11, 102, 178, 0.08);
}

/* Chips */
.types {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.chip {
  display: inline-block;
  padding: 2px var(--space-3);
  border-radius: var(--radius-full);
  background-color: rgba(242, 169, 0, 0.15);
  color: var(--neutral-800);
  font-size: 0.8125rem;
}

/* Product tabs */
.product-tabs-bora {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.tab-bora {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
}

.tab-bora.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

/* Product cards */
.product-note {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.subcategory-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: var(--space-4);
}

.subcard {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-4);
  box-shadow: var(--shadow-sm);
  cursor: pointer;
  transition: box-shadow var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.subcard:hover,
.subcard:focus {
  box-shadow: var(--shadow-md);
  transform: translateY(-2px);
  outline: none;
}

.subcard h4 {
  font-size: 1.125rem;
  margin-bottom: var(--space-1);
}

.subcard p {
  color: var(--text-secondary);
  margin-bottom: var(--space-3);
}

.subcard-actions {
  margin-top: var(--space-2);
}

/* Product modal, hidden until .open */
.product-modal {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 100;
  align-items: center;
  justify-content: center;
}

.product-modal.open {
  display: flex;
}

.modal-backdrop {
  position: absolute;
  inset: 0;
  background-color: rgba(17, 24, 39, 0.55);
}

.modal-panel {
  position: relative;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  padding: var(--space-6);
  width: min(520px, 92vw);
}

.modal-panel h3 {
  margin-bottom: var(--space-2);
}

.modal-panel p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.modal-close {
  position: absolute;
  top: var(--space-3);
  right: var(--space-3);
  border: none;
  background: none;
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  color: var(--text-secondary);
}

/* Forms */
.contact-form {
  display: grid;
  gap: var(--space-3);
  max-width: 640px;
}

.contact-form label {
  font-weight: 500;
}

.contact-form input,
.contact-form textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  font: inherit;
}

.form-actions {
  display: flex;
  gap: var(--space-3);
}

.form-status {
  min-height: 1.5em;
}
"#;
