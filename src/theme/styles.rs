//! Global CSS styles for GearHire.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --canvas: #faf7f2;
  --surface: #ffffff;
  --border: #e4ddd2;
  --canvas-green: #2f6b4f;
  --canvas-green-dark: #224f3a;
  --sun: #e8a33d;
  --text-primary: #1f2421;
  --text-secondary: #5b635e;
  --text-muted: #8c938f;
  --shadow: rgba(31, 36, 33, 0.16);
  --radius: 8px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--canvas);
  color: var(--text-primary);
  font-family: "Inter", -apple-system, "Segoe UI", sans-serif;
  line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

/* === Layout === */
.page { min-height: 100vh; display: flex; flex-direction: column; }
.page-content { flex: 1; width: 100%; max-width: 1200px; margin: 0 auto; padding: 0 24px 48px; }
.section-header { font-size: 1.4rem; margin: 40px 0 16px; }

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 14px 24px;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
}
.brand { font-weight: 700; font-size: 1.2rem; color: var(--canvas-green); }
.nav-links { display: flex; align-items: center; gap: 20px; }
.nav-link:hover { color: var(--canvas-green); }

/* === Hero === */
.hero-promo {
  margin-top: 32px;
  padding: 56px 48px;
  border-radius: var(--radius);
  background: linear-gradient(120deg, var(--canvas-green), var(--canvas-green-dark));
  color: var(--surface);
}
.hero-title { margin: 0 0 12px; font-size: 2.2rem; }
.hero-pitch { max-width: 560px; margin: 0 0 24px; opacity: 0.9; }

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 20px;
}
.event-card,
.product-card,
.catalog-detail {
  padding: 20px;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.card-header { display: flex; align-items: center; justify-content: space-between; }
.card-category { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.05em; color: var(--text-muted); }
.card-title { display: block; margin: 8px 0; font-weight: 600; font-size: 1.05rem; }
.card-body { color: var(--text-secondary); margin: 0 0 16px; }
.card-rate { color: var(--sun); font-weight: 600; }

.catalog-detail { margin-top: 32px; max-width: 640px; }
.detail-title { margin: 8px 0; }
.detail-summary { color: var(--text-secondary); }
.not-found { margin-top: 64px; text-align: center; }

/* === Footer === */
.site-footer {
  display: flex;
  align-items: center;
  gap: 24px;
  padding: 24px;
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
}
.footer-brand { font-weight: 600; color: var(--text-primary); }
.footer-note { flex: 1; }

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost,
.btn-menu-item,
.icon-btn,
.close-btn {
  font: inherit;
  cursor: pointer;
  border-radius: var(--radius);
  border: 1px solid transparent;
  background: none;
  color: inherit;
}
.btn-primary { padding: 10px 20px; background: var(--sun); color: var(--text-primary); font-weight: 600; }
.btn-primary:hover { filter: brightness(0.95); }
.btn-outline { padding: 8px 16px; border-color: var(--canvas-green); color: var(--canvas-green); }
.btn-outline:hover { background: var(--canvas-green); color: var(--surface); }
.btn-ghost { padding: 8px 12px; }
.btn-ghost:hover { background: var(--canvas); }
.icon-btn { width: 32px; height: 32px; font-size: 1.2rem; }
.icon-btn:hover { background: var(--canvas); }
.close-btn { width: 24px; height: 24px; color: var(--text-muted); }

/* === Popover === */
.popover-trigger[aria-expanded="true"] { outline: 2px solid var(--canvas-green); outline-offset: 2px; }

.popover-menu {
  z-index: 100;
  display: flex;
  flex-direction: column;
  padding: 8px;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: 0 8px 24px var(--shadow);
  color: var(--text-primary);
  animation: popover-in 120ms ease-out;
}
.popover-menu[data-placement="above"] { animation-name: popover-in-above; }
.popover-menu-header { display: flex; justify-content: flex-end; }
.btn-menu-item {
  display: flex;
  align-items: center;
  gap: 10px;
  width: 100%;
  padding: 8px 10px;
  text-align: left;
}
.btn-menu-item:hover,
.btn-menu-item:focus { background: var(--canvas); }
.menu-icon { width: 20px; text-align: center; }

@keyframes popover-in {
  from { opacity: 0; transform: translateY(-4px); }
  to { opacity: 1; transform: translateY(0); }
}
@keyframes popover-in-above {
  from { opacity: 0; transform: translateY(4px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
