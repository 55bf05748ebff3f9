//! Global CSS for GupShup.
//!
//! Light palette by default; `.app--dark` on the root swaps the variables.

pub const GLOBAL_STYLES: &str = r#"
/* === Palette === */
.app {
  --bg: #f4f6f8;
  --surface: #ffffff;
  --surface-alt: #eef1f4;
  --border: #dde2e7;
  --text: #1c232b;
  --text-muted: #6b7785;
  --accent: #2f80ed;
  --accent-soft: rgba(47, 128, 237, 0.12);
  --mine: #2f80ed;
  --mine-text: #ffffff;
  --theirs: #ffffff;
  --theirs-text: #1c232b;
  --seen: #27ae60;
  --danger: #e5484d;
  --success: #30a46c;
  --radius: 14px;
}

.app--dark {
  --bg: #0f1419;
  --surface: #161d24;
  --surface-alt: #1e2730;
  --border: #26313c;
  --text: #e6ebf0;
  --text-muted: #8a96a3;
  --accent: #4c9aff;
  --accent-soft: rgba(76, 154, 255, 0.16);
  --mine: #2b6cc4;
  --theirs: #1e2730;
  --theirs-text: #e6ebf0;
  --seen: #3dd68c;
}

/* === Base === */
* { box-sizing: border-box; }

html, body {
  margin: 0;
  height: 100%;
  font-family: -apple-system, "Segoe UI", Roboto, "Noto Sans", sans-serif;
  font-size: 14px;
}

.app {
  height: 100vh;
  background: var(--bg);
  color: var(--text);
  overflow: hidden;
}

button { font: inherit; cursor: pointer; }
button:disabled { cursor: not-allowed; opacity: 0.55; }

.fatal {
  padding: 48px;
  text-align: center;
  color: var(--danger, #e5484d);
}

/* === Buttons === */
.btn {
  border: none;
  border-radius: 10px;
  padding: 10px 16px;
  font-weight: 600;
}
.btn--primary { background: var(--accent); color: #fff; }
.btn--ghost { background: transparent; color: var(--text); border: 1px solid var(--border); }
.btn--block { width: 100%; margin-top: 8px; }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border: none;
  border-radius: 50%;
  background: transparent;
  color: var(--text-muted);
}
.icon-btn:hover:not(:disabled) { background: var(--surface-alt); color: var(--text); }

/* === Loading === */
.loading-overlay {
  height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 12px;
  color: var(--text-muted);
}

.loading-spinner {
  width: 28px;
  height: 28px;
  border: 3px solid var(--accent-soft);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}
.loading-text { margin: 0; }
.loading-spinner--small { width: 16px; height: 16px; border-width: 2px; }

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 16px;
  bottom: 16px;
  display: flex;
  flex-direction: column;
  gap: 8px;
  z-index: 100;
}
.toast {
  min-width: 220px;
  max-width: 360px;
  padding: 12px 14px;
  border-radius: 10px;
  background: var(--surface);
  border-left: 4px solid var(--accent);
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.18);
  cursor: pointer;
}
.toast--success { border-left-color: var(--success); }
.toast--error { border-left-color: var(--danger); }

/* === Forms === */
.auth-page {
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 16px;
  overflow-y: auto;
}
.auth-card {
  width: 100%;
  max-width: 400px;
  padding: 28px;
  border-radius: var(--radius);
  background: var(--surface);
  border: 1px solid var(--border);
}
.auth-card__title { margin: 0 0 4px; font-size: 22px; }
.auth-card__subtitle { margin: 0 0 20px; color: var(--text-muted); }
.auth-card__footer { margin-top: 16px; text-align: center; color: var(--text-muted); }
.auth-card__footer a { color: var(--accent); }

.segmented {
  display: flex;
  gap: 4px;
  padding: 4px;
  margin-bottom: 16px;
  border-radius: 10px;
  background: var(--surface-alt);
}
.segmented__item {
  flex: 1;
  padding: 8px;
  border: none;
  border-radius: 8px;
  background: transparent;
  color: var(--text-muted);
}
.segmented__item--active { background: var(--surface); color: var(--text); font-weight: 600; }

.field { display: flex; flex-direction: column; gap: 6px; margin-bottom: 14px; }
.field__label { font-weight: 600; font-size: 13px; }
.field__row { display: flex; align-items: center; gap: 6px; }
.field__input {
  width: 100%;
  padding: 10px 12px;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  font: inherit;
}
.field__input:focus { outline: 2px solid var(--accent-soft); border-color: var(--accent); }
.field__input--invalid { border-color: var(--danger); }
.field__input--area { resize: vertical; }
.field__toggle {
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--surface-alt);
  color: var(--text-muted);
  padding: 9px 10px;
}
.field__error { color: var(--danger); font-size: 12px; }

/* === Chat screen === */
.chat-screen { display: flex; height: 100vh; }

.sidebar {
  display: flex;
  flex-direction: column;
  width: 340px;
  min-width: 280px;
  border-right: 1px solid var(--border);
  background: var(--surface);
}
.chat-screen .sidebar:only-child { width: 100%; }

.sidebar__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 12px;
  border-bottom: 1px solid var(--border);
}
.sidebar__me {
  display: flex;
  align-items: center;
  gap: 10px;
  border: none;
  background: transparent;
  color: var(--text);
  font-weight: 600;
}
.sidebar__me-name { max-width: 160px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.sidebar__actions { display: flex; gap: 4px; }
.sidebar__search { padding: 10px 12px; }

.search-input {
  width: 100%;
  padding: 9px 12px;
  border-radius: 20px;
  border: 1px solid var(--border);
  background: var(--surface-alt);
  color: var(--text);
}

.avatar {
  width: 40px;
  height: 40px;
  flex-shrink: 0;
  border-radius: 50%;
  object-fit: cover;
}
.avatar--initial {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--accent-soft);
  color: var(--accent);
  font-weight: 700;
}
.avatar--large { width: 96px; height: 96px; font-size: 36px; }

.user-list { list-style: none; margin: 0; padding: 0; overflow-y: auto; flex: 1; }
.user-list__status {
  display: flex;
  justify-content: center;
  padding: 32px;
  color: var(--text-muted);
}

.user-row {
  display: flex;
  gap: 12px;
  padding: 10px 12px;
  cursor: pointer;
}
.user-row:hover { background: var(--surface-alt); }
.user-row--active { background: var(--accent-soft); }
.user-row__body { flex: 1; min-width: 0; }
.user-row__top { display: flex; justify-content: space-between; gap: 8px; }
.user-row__name { font-weight: 600; }
.user-row__time { color: var(--text-muted); font-size: 12px; }
.user-row__preview {
  margin: 2px 0 0;
  color: var(--text-muted);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.detail { flex: 1; display: flex; min-width: 0; }

.chat-empty {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 8px;
  color: var(--text-muted);
}
.chat-empty__art { font-size: 56px; }
.chat-empty__title { margin: 0; color: var(--text); }
.chat-empty__text { margin: 0; max-width: 320px; text-align: center; }

/* === Conversation === */
.conversation { flex: 1; display: flex; flex-direction: column; min-width: 0; }

.conversation__header {
  display: flex;
  align-items: center;
  gap: 10px;
  padding: 10px 14px;
  border-bottom: 1px solid var(--border);
  background: var(--surface);
}
.conversation__peer { min-width: 0; }
.conversation__name { margin: 0; font-size: 16px; }
.conversation__subtitle { margin: 0; color: var(--text-muted); font-size: 12px; }

.conversation__messages {
  flex: 1;
  overflow-y: auto;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 6px;
}
.conversation__loading,
.conversation__empty {
  margin: auto;
  text-align: center;
  color: var(--text-muted);
}
.conversation__empty-icon { font-size: 40px; margin: 0; }
.conversation__empty-text { margin: 8px 0 2px; font-weight: 600; color: var(--text); }
.conversation__empty-hint { margin: 0; font-size: 12px; }
.conversation__anchor { height: 1px; }

.message-row { display: flex; }
.message-row--mine { justify-content: flex-end; }
.message-row--theirs { justify-content: flex-start; }

.message-bubble {
  max-width: min(70%, 520px);
  padding: 8px 12px;
  border-radius: var(--radius);
  overflow-wrap: anywhere;
}
.message-bubble--mine { background: var(--mine); color: var(--mine-text); border-bottom-right-radius: 4px; }
.message-bubble--theirs {
  background: var(--theirs);
  color: var(--theirs-text);
  border: 1px solid var(--border);
  border-bottom-left-radius: 4px;
}
.message-bubble__text { margin: 0; white-space: pre-wrap; }
.message-bubble__meta {
  display: flex;
  justify-content: flex-end;
  align-items: center;
  gap: 4px;
  margin-top: 4px;
  font-size: 11px;
  opacity: 0.8;
}

.message-bubble__time { white-space: nowrap; }

.status-icon { display: inline-flex; align-items: center; }
.status-icon .status-check + .status-check { margin-left: -8px; }
.status-icon--seen { color: var(--seen); }
.status-label { margin-left: 4px; }

.image-message { position: relative; margin-bottom: 4px; }
.image-message__img { display: block; max-width: 100%; max-height: 320px; border-radius: 10px; }
.image-message__img--hidden { visibility: hidden; height: 0; }
.image-message__placeholder,
.image-message__fallback {
  width: 220px;
  height: 160px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 10px;
  background: rgba(0, 0, 0, 0.08);
}

/* === Composer === */
.message-input { border-top: 1px solid var(--border); background: var(--surface); padding: 8px 12px; }
.message-input__bar { display: flex; align-items: flex-end; gap: 6px; }
.message-input__text {
  flex: 1;
  resize: none;
  max-height: 120px;
  padding: 9px 12px;
  border-radius: 18px;
  border: 1px solid var(--border);
  background: var(--surface-alt);
  color: var(--text);
  font: inherit;
}
.message-input__staged { display: flex; align-items: center; gap: 8px; padding-bottom: 8px; }
.message-input__thumb { width: 48px; height: 48px; border-radius: 8px; object-fit: cover; }
.message-input__file { flex: 1; color: var(--text-muted); overflow: hidden; text-overflow: ellipsis; }

.send-btn {
  width: 38px;
  height: 38px;
  border: none;
  border-radius: 50%;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--surface-alt);
  color: var(--text-muted);
}
.send-btn--active { background: var(--accent); color: #fff; }

.emoji-palette {
  display: grid;
  grid-template-columns: repeat(8, 1fr);
  gap: 2px;
  padding-bottom: 8px;
}
.emoji-palette__item { border: none; background: transparent; font-size: 20px; padding: 4px; border-radius: 6px; }
.emoji-palette__item:hover { background: var(--surface-alt); }

/* === Profile === */
.profile-page { height: 100vh; overflow-y: auto; }
.profile-page__header {
  display: flex;
  align-items: center;
  gap: 12px;
  padding: 12px 16px;
  border-bottom: 1px solid var(--border);
  background: var(--surface);
}
.profile-page__title { margin: 0; font-size: 18px; }
.profile-card {
  max-width: 520px;
  margin: 24px auto;
  padding: 24px;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--surface);
}
.profile-card__avatar {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 10px;
  margin-bottom: 20px;
}
"#;
