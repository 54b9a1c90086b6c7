//! Layout and typography rules for each component template.
//!
//! Every template has a static rule set plus an optional set of interactive
//! rules (`:hover` states of inner controls). The interactive rules are only
//! emitted when the config enables a hover effect.

pub(super) const CARD: &str = r#".liquid-glass-card .content {
  position: relative;
  z-index: 10;
}

.liquid-glass-card .title {
  font-size: 18px;
  font-weight: 600;
  color: white;
  margin: 0 0 12px 0;
}

.liquid-glass-card .description {
  color: rgba(255, 255, 255, 0.8);
  line-height: 1.6;
  margin: 0;
  font-size: 14px;
}

@media (min-width: 1024px) {
  .liquid-glass-card .title {
    font-size: 20px;
  }

  .liquid-glass-card .description {
    font-size: 16px;
  }
}"#;

pub(super) const BUTTON: &str = r#".liquid-glass-button {
  background: transparent;
  cursor: pointer;
  transition: transform 0.1s ease;
  min-height: 44px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.liquid-glass-button:active {
  transform: scale(0.95);
}

.liquid-glass-button .content {
  position: relative;
  z-index: 10;
  color: white;
  font-weight: 500;
  font-size: 14px;
}

@media (min-width: 1024px) {
  .liquid-glass-button .content {
    font-size: 16px;
  }
}"#;

pub(super) const MODAL: &str = r#".liquid-glass-modal {
  width: 100%;
  max-width: 28rem;
  margin: 0 auto;
}

.liquid-glass-modal .content {
  position: relative;
  z-index: 10;
}

.liquid-glass-modal .header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 12px;
}

.liquid-glass-modal .title {
  font-size: 16px;
  font-weight: 600;
  color: white;
  margin: 0;
}

.liquid-glass-modal .close-button {
  background: none;
  border: none;
  color: white;
  cursor: pointer;
  padding: 4px;
  font-size: 16px;
}

.liquid-glass-modal .body {
  color: rgba(255, 255, 255, 0.8);
  margin-bottom: 16px;
  font-size: 14px;
  line-height: 1.5;
}

.liquid-glass-modal .actions {
  display: flex;
  justify-content: flex-end;
  gap: 8px;
}

.liquid-glass-modal .button {
  padding: 8px 16px;
  border: none;
  border-radius: 4px;
  cursor: pointer;
  font-size: 14px;
  transition: background-color 0.2s;
}

.liquid-glass-modal .button.secondary {
  background: transparent;
  color: rgba(255, 255, 255, 0.8);
}

.liquid-glass-modal .button.primary {
  background: rgba(255, 255, 255, 0.2);
  color: white;
}

@media (min-width: 1024px) {
  .liquid-glass-modal .header {
    margin-bottom: 16px;
  }

  .liquid-glass-modal .title {
    font-size: 18px;
  }

  .liquid-glass-modal .body {
    font-size: 16px;
  }

  .liquid-glass-modal .button {
    font-size: 16px;
  }
}"#;

pub(super) const MODAL_INTERACTIVE: &str = r#".liquid-glass-modal .close-button:hover {
  color: rgba(255, 255, 255, 0.7);
}

.liquid-glass-modal .button.secondary:hover {
  color: white;
}

.liquid-glass-modal .button.primary:hover {
  background: rgba(255, 255, 255, 0.3);
}"#;

pub(super) const PANEL: &str = r#".liquid-glass-panel {
  width: 100%;
  max-width: 20rem;
  margin: 0 auto;
}

.liquid-glass-panel .content {
  position: relative;
  z-index: 10;
}

.liquid-glass-panel .title {
  font-size: 16px;
  font-weight: 600;
  color: white;
  margin: 0 0 12px 0;
}

.liquid-glass-panel .control-item {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 12px;
}

.liquid-glass-panel .control-label {
  color: rgba(255, 255, 255, 0.8);
  font-size: 14px;
}

.liquid-glass-panel .control-value {
  color: white;
  font-size: 14px;
}

.liquid-glass-panel .slider-container {
  width: 100%;
  height: 8px;
  background: rgba(255, 255, 255, 0.2);
  border-radius: 9999px;
  margin-bottom: 12px;
  cursor: pointer;
}

.liquid-glass-panel .slider-fill {
  height: 100%;
  background: rgba(255, 255, 255, 0.6);
  border-radius: 9999px;
}

@media (min-width: 1024px) {
  .liquid-glass-panel .title {
    font-size: 18px;
  }

  .liquid-glass-panel .control-label,
  .liquid-glass-panel .control-value {
    font-size: 16px;
  }
}"#;

pub(super) const NAVIGATION: &str = r#".liquid-glass-nav {
  width: 100%;
  max-width: 48rem;
  margin: 0 auto;
}

.liquid-glass-nav .content {
  position: relative;
  z-index: 10;
}

.liquid-glass-nav .nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.liquid-glass-nav .nav-left {
  display: flex;
  align-items: center;
  gap: 16px;
}

.liquid-glass-nav .brand {
  font-size: 18px;
  font-weight: 600;
  color: white;
  text-decoration: none;
}

.liquid-glass-nav .nav-links {
  display: none;
  gap: 16px;
}

.liquid-glass-nav .nav-link {
  color: rgba(255, 255, 255, 0.8);
  text-decoration: none;
  font-size: 14px;
  transition: color 0.2s;
}

.liquid-glass-nav .menu-button {
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.8);
  cursor: pointer;
  padding: 4px;
}

.liquid-glass-nav .menu-icon {
  width: 20px;
  height: 20px;
}

@media (min-width: 768px) {
  .liquid-glass-nav .nav-links {
    display: flex;
  }
}

@media (min-width: 1024px) {
  .liquid-glass-nav .nav-link {
    font-size: 16px;
  }
}"#;

pub(super) const NAVIGATION_INTERACTIVE: &str = r#".liquid-glass-nav .nav-link:hover {
  color: white;
}

.liquid-glass-nav .menu-button:hover {
  color: white;
}"#;

pub(super) const SIDEBAR: &str = r#".liquid-glass-sidebar {
  width: 100%;
  max-width: 18rem;
  margin: 0 auto;
  height: 24rem;
}

.liquid-glass-sidebar .content {
  position: relative;
  z-index: 10;
  height: 100%;
  display: flex;
  flex-direction: column;
}

.liquid-glass-sidebar .title {
  font-size: 18px;
  font-weight: 600;
  color: white;
  margin: 0 0 16px 0;
}

.liquid-glass-sidebar .nav {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.liquid-glass-sidebar .nav-item {
  display: flex;
  align-items: center;
  gap: 12px;
  color: rgba(255, 255, 255, 0.8);
  text-decoration: none;
  padding: 8px;
  border-radius: 6px;
  transition: color 0.2s;
  font-size: 14px;
}

.liquid-glass-sidebar .nav-item.active {
  color: rgba(255, 255, 255, 0.9);
}

.liquid-glass-sidebar .nav-icon {
  width: 20px;
  height: 20px;
}

@media (min-width: 1024px) {
  .liquid-glass-sidebar .nav-item {
    font-size: 16px;
  }
}"#;

pub(super) const SIDEBAR_INTERACTIVE: &str = r#".liquid-glass-sidebar .nav-item:hover {
  color: white;
}"#;

pub(super) const DROPDOWN: &str = r#".liquid-glass-dropdown {
  width: 100%;
  max-width: 18rem;
  margin: 0 auto;
}

.liquid-glass-dropdown .content {
  position: relative;
  z-index: 10;
}

.liquid-glass-dropdown .trigger {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 12px;
  cursor: pointer;
  padding: 0;
  background: none;
  border: none;
  width: 100%;
}

.liquid-glass-dropdown .trigger-text {
  color: white;
  font-size: 14px;
}

.liquid-glass-dropdown .trigger-icon {
  width: 16px;
  height: 16px;
  color: rgba(255, 255, 255, 0.8);
}

.liquid-glass-dropdown .options {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.liquid-glass-dropdown .option {
  padding: 8px;
  color: rgba(255, 255, 255, 0.8);
  border-radius: 4px;
  cursor: pointer;
  transition: all 0.2s;
  font-size: 14px;
}

.liquid-glass-dropdown .option.selected {
  color: rgba(255, 255, 255, 0.9);
}

@media (min-width: 1024px) {
  .liquid-glass-dropdown .trigger-text,
  .liquid-glass-dropdown .option {
    font-size: 16px;
  }
}"#;

pub(super) const DROPDOWN_INTERACTIVE: &str = r#".liquid-glass-dropdown .option:hover {
  color: white;
  background: rgba(255, 255, 255, 0.1);
}"#;

pub(super) const TOAST: &str = r#".liquid-glass-toast {
  width: 100%;
  max-width: 20rem;
  margin: 0 auto;
}

.liquid-glass-toast .content {
  position: relative;
  z-index: 10;
}

.liquid-glass-toast .toast-container {
  display: flex;
  align-items: flex-start;
  gap: 12px;
}

.liquid-glass-toast .icon {
  flex-shrink: 0;
}

.liquid-glass-toast .success-icon {
  width: 20px;
  height: 20px;
  color: #10b981;
}

.liquid-glass-toast .message {
  flex: 1;
}

.liquid-glass-toast .title {
  color: white;
  font-weight: 500;
  margin: 0 0 4px 0;
  font-size: 14px;
}

.liquid-glass-toast .description {
  color: rgba(255, 255, 255, 0.8);
  margin: 0;
  font-size: 12px;
  line-height: 1.4;
}

.liquid-glass-toast .close-button {
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.6);
  cursor: pointer;
  padding: 0;
  width: 16px;
  height: 16px;
}

@media (min-width: 1024px) {
  .liquid-glass-toast .title {
    font-size: 16px;
  }

  .liquid-glass-toast .description {
    font-size: 14px;
  }
}"#;

pub(super) const TOAST_INTERACTIVE: &str = r#".liquid-glass-toast .close-button:hover {
  color: white;
}"#;

pub(super) const INPUT: &str = r#".liquid-glass-form {
  width: 100%;
  max-width: 20rem;
  margin: 0 auto;
}

.liquid-glass-form .content {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.liquid-glass-form .field {
  display: flex;
  flex-direction: column;
}

.liquid-glass-form .label {
  display: block;
  color: rgba(255, 255, 255, 0.8);
  margin-bottom: 8px;
  font-size: 14px;
}

.liquid-glass-form .input {
  width: 100%;
  padding: 8px 12px;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 6px;
  color: white;
  font-size: 14px;
}

.liquid-glass-form .input::placeholder {
  color: rgba(255, 255, 255, 0.5);
}

.liquid-glass-form .input:focus {
  outline: none;
  border-color: rgba(255, 255, 255, 0.4);
}

.liquid-glass-form .submit-button {
  width: 100%;
  padding: 12px;
  background: rgba(255, 255, 255, 0.2);
  color: white;
  border: none;
  border-radius: 6px;
  cursor: pointer;
  font-size: 14px;
  transition: background-color 0.2s;
}

@media (min-width: 1024px) {
  .liquid-glass-form .label,
  .liquid-glass-form .input,
  .liquid-glass-form .submit-button {
    font-size: 16px;
  }
}"#;

pub(super) const INPUT_INTERACTIVE: &str = r#".liquid-glass-form .submit-button:hover {
  background: rgba(255, 255, 255, 0.3);
}"#;
