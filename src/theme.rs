//! App stylesheet. Injected as an inline `<style>` block by the app shell.

pub const APP_CSS: &str = r#"
:root {
    --color-bg: #f9fafb;
    --color-surface: #ffffff;
    --color-border: #e5e7eb;
    --color-text: #111827;
    --color-text-muted: #6b7280;
    --color-accent: #7c3aed;
    --color-accent-soft: #f5f3ff;
    --color-accent-border: #ddd6fe;
    --color-price: #059669;
    --color-danger: #ef4444;
    --color-chat-user-bg: #7c3aed;
    --color-chat-user-text: #ffffff;
    --color-chat-counterpart-bg: #ffffff;
    --color-chat-counterpart-text: #111827;
    --color-status-read: #3b82f6;
}
* { box-sizing: border-box; margin: 0; }
body {
    background: var(--color-bg);
    color: var(--color-text);
    font-family: Inter, -apple-system, "Segoe UI", sans-serif;
    font-size: 14px;
}
.main-container { max-width: 480px; margin: 0 auto; padding: 0 1rem 5rem; }

.splash-overlay {
    position: fixed; inset: 0; z-index: 50;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(135deg, #7c3aed, #4f46e5);
}
.splash-wordmark { color: #fff; font-size: 2rem; font-weight: 700; }
.splash-tagline { color: #ede9fe; margin-top: 0.5rem; text-align: center; }

.header {
    position: sticky; top: 0; z-index: 10;
    background: var(--color-surface);
    border-bottom: 1px solid var(--color-border);
}
.header-content {
    max-width: 480px; margin: 0 auto; padding: 0.75rem 1rem;
    display: flex; align-items: center; justify-content: space-between;
}
.header-wordmark { font-size: 1.1rem; font-weight: 700; color: var(--color-accent); }
.tabs { display: flex; gap: 0.25rem; }
.tab {
    font-size: 0.85rem; font-weight: 500; padding: 0.4rem 0.75rem;
    border: none; background: none; border-radius: 999px;
    color: var(--color-text-muted); cursor: pointer;
}
.tab.active { background: var(--color-accent-soft); color: var(--color-accent); }

.screen-header { padding: 1rem 0 0.25rem; }
.screen-subtitle { color: var(--color-text-muted); margin-top: 0.15rem; }
.section-title { font-size: 1.05rem; font-weight: 700; margin: 1.25rem 0 0.75rem; }
.empty-note { color: var(--color-text-muted); text-align: center; padding: 3rem 0; }

.search-input {
    width: 100%; padding: 0.65rem 1rem; margin-top: 0.75rem;
    border: 1px solid var(--color-border); border-radius: 999px;
    background: var(--color-surface); font-size: 0.9rem;
}
.search-input:focus { outline: none; border-color: var(--color-accent); }

.request-banner {
    width: 100%; margin-top: 1rem; padding: 1.25rem;
    display: flex; align-items: center; justify-content: space-between;
    border: none; border-radius: 1rem; cursor: pointer; text-align: left;
    background: linear-gradient(90deg, #7c3aed, #4f46e5); color: #fff;
}
.request-banner h2 { font-size: 1.1rem; }
.request-banner p { color: #ddd6fe; margin-top: 0.25rem; }
.banner-arrow { font-size: 1.4rem; }

.designer-strip { display: flex; gap: 0.75rem; overflow-x: auto; padding-bottom: 0.5rem; }
.designer-chip-card {
    min-width: 9rem; padding: 1rem; text-align: center;
    background: var(--color-surface); border: 1px solid var(--color-border);
    border-radius: 1rem;
}
.avatar { width: 3rem; height: 3rem; border-radius: 50%; object-fit: cover; }
.avatar-lg { width: 3.5rem; height: 3.5rem; }
.designer-name { font-weight: 600; margin-top: 0.5rem; }
.designer-speciality { color: var(--color-text-muted); font-size: 0.8rem; margin-top: 0.15rem; }
.designer-rating { color: #b45309; font-size: 0.8rem; margin-top: 0.25rem; }

.item-card {
    display: block; width: 100%; margin-bottom: 1.25rem; padding: 0;
    background: var(--color-surface); border: 1px solid var(--color-border);
    border-radius: 1rem; overflow: hidden; cursor: pointer; text-align: left;
    font: inherit; color: inherit;
}
.item-image-wrap { position: relative; }
.item-image { width: 100%; height: 16rem; object-fit: cover; display: block; }
.item-body { padding: 1rem; }
.item-name { font-size: 1rem; font-weight: 700; }
.item-designer { color: var(--color-text-muted); margin-top: 0.2rem; }
.item-footer { display: flex; align-items: center; gap: 0.6rem; margin-top: 0.75rem; }
.item-price { color: var(--color-price); font-weight: 700; margin-right: auto; }
.item-rating { color: #b45309; font-size: 0.8rem; }

.badge {
    padding: 0.2rem 0.6rem; border-radius: 999px; font-size: 0.72rem; font-weight: 600;
}
.badge-soldout { position: absolute; top: 0.75rem; left: 0.75rem; background: var(--color-danger); color: #fff; }
.badge-verified { background: #3b82f6; color: #fff; }
.chip {
    padding: 0.3rem 0.85rem; border-radius: 999px; font-size: 0.8rem;
    border: 1px solid var(--color-border); background: var(--color-surface);
    color: var(--color-text-muted); cursor: pointer;
}
.chip.active { background: var(--color-accent); border-color: var(--color-accent); color: #fff; }
.chip-row { display: flex; gap: 0.5rem; overflow-x: auto; padding: 0.75rem 0; }
.chip-category { cursor: default; color: var(--color-accent); border-color: var(--color-accent-border); background: var(--color-accent-soft); }

.designer-card {
    background: var(--color-surface); border: 1px solid var(--color-border);
    border-radius: 1rem; padding: 1.25rem; margin-bottom: 1.25rem;
}
.designer-card-head { display: flex; align-items: center; gap: 0.75rem; }
.designer-location { color: var(--color-text-muted); font-size: 0.8rem; }
.designer-stats { display: flex; justify-content: space-between; margin-top: 0.9rem; color: var(--color-text-muted); font-size: 0.85rem; }
.portfolio-row { display: flex; gap: 0.5rem; margin-top: 0.9rem; }
.portfolio-thumb { width: 33%; height: 5rem; object-fit: cover; border-radius: 0.5rem; }
.designer-card-foot {
    display: flex; align-items: center; justify-content: space-between;
    margin-top: 1rem; padding-top: 0.9rem; border-top: 1px solid var(--color-border);
}
.foot-label { color: var(--color-text-muted); font-size: 0.8rem; }
.foot-price { color: var(--color-price); font-weight: 700; }

.btn {
    padding: 0.6rem 1.25rem; border-radius: 999px; font-weight: 600;
    border: 1px solid var(--color-border); background: var(--color-surface);
    cursor: pointer; font-size: 0.9rem;
}
.btn-primary { background: var(--color-accent); border-color: var(--color-accent); color: #fff; }
.btn-primary:disabled { background: #d1d5db; border-color: #d1d5db; cursor: default; }
.btn-block { width: 100%; margin-top: 0.75rem; }
.back-btn { border: none; background: none; color: var(--color-accent); font-weight: 600; cursor: pointer; padding: 0.75rem 0; }

.detail-hero { width: 100%; height: 22rem; object-fit: cover; border-radius: 1rem; margin-top: 1rem; }
.detail-title-row { display: flex; justify-content: space-between; align-items: flex-start; margin-top: 1rem; gap: 1rem; }
.detail-price { color: var(--color-price); font-size: 1.25rem; font-weight: 700; white-space: nowrap; }
.detail-meta { color: var(--color-text-muted); margin-top: 0.35rem; }
.detail-card {
    background: var(--color-surface); border: 1px solid var(--color-border);
    border-radius: 1rem; padding: 1rem; margin-top: 1rem;
}
.feature-row { display: flex; gap: 0.5rem; padding: 0.3rem 0; color: var(--color-text-muted); }
.feature-check { color: var(--color-price); }
.similar-strip { display: flex; gap: 0.75rem; overflow-x: auto; }
.similar-card { min-width: 8rem; }
.similar-image { width: 8rem; height: 8rem; object-fit: cover; border-radius: 0.75rem; display: block; }
.order-note { margin-top: 0.75rem; color: var(--color-text-muted); text-align: center; }

.form-card {
    background: var(--color-surface); border: 1px solid var(--color-border);
    border-radius: 1rem; padding: 1rem; margin-top: 1rem;
}
.form-label { font-weight: 600; display: block; margin-bottom: 0.5rem; }
.form-input, .form-select, .form-textarea {
    width: 100%; padding: 0.6rem 0.8rem; font-size: 0.9rem;
    border: 1px solid var(--color-border); border-radius: 0.6rem;
    background: var(--color-surface); color: var(--color-text);
}
.form-textarea { min-height: 6rem; resize: vertical; font-family: inherit; }
.form-error { color: var(--color-danger); margin-top: 1rem; font-weight: 500; }
.confirm-card { text-align: center; padding: 2.5rem 1.5rem; }
.confirm-card h2 { margin-bottom: 0.75rem; }
.confirm-card p { color: var(--color-text-muted); }

.chat-screen { display: flex; flex-direction: column; height: 100vh; max-width: 480px; margin: 0 auto; }
.chat-header {
    display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1rem;
    background: var(--color-surface); border-bottom: 1px solid var(--color-border);
}
.chat-header-name { font-weight: 700; }
.chat-presence { display: flex; align-items: center; gap: 0.35rem; color: var(--color-text-muted); font-size: 0.8rem; }
.presence-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #22c55e; }
.context-banner {
    display: flex; align-items: center; gap: 0.6rem; margin: 0.75rem 1rem; padding: 0.75rem;
    background: var(--color-accent-soft); border: 1px solid var(--color-accent-border);
    border-radius: 0.75rem; color: var(--color-accent);
}
.chat-list { flex: 1; overflow-y: auto; padding: 0.5rem 1rem; }
.message-row { display: flex; margin-bottom: 1rem; }
.message-row.user { justify-content: flex-end; }
.message-row.counterpart { justify-content: flex-start; gap: 0.5rem; }
.message-stack { max-width: 75%; }
.message-row.user .message-stack { text-align: right; }
.bubble { padding: 0.7rem 1rem; border-radius: 1rem; display: inline-block; text-align: left; }
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); border-bottom-right-radius: 0.3rem; }
.bubble.counterpart {
    background: var(--color-chat-counterpart-bg); color: var(--color-chat-counterpart-text);
    border: 1px solid var(--color-border); border-bottom-left-radius: 0.3rem;
}
.message-meta { margin-top: 0.25rem; font-size: 0.72rem; color: var(--color-text-muted); }
.message-status.read { color: var(--color-status-read); }
.composer {
    display: flex; align-items: flex-end; gap: 0.6rem; padding: 0.75rem 1rem;
    background: var(--color-surface); border-top: 1px solid var(--color-border);
}
.composer textarea {
    flex: 1; min-height: 2.6rem; max-height: 8rem; padding: 0.6rem 1rem;
    border: 1px solid var(--color-border); border-radius: 1.3rem; resize: none;
    font: inherit; background: var(--color-surface);
}
.composer textarea:focus { outline: none; border-color: var(--color-accent); }
"#;
