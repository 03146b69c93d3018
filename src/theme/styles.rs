//! Global CSS styles for Mangafolio.
//!
//! Black ink panels on paper, halftone shading and speed lines. Colors come
//! from the custom properties in `colors.rs`, so hacker mode is a variable
//! swap plus a handful of overrides at the bottom.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-display: 'Bangers', 'Impact', sans-serif;
  --font-body: 'Comic Neue', 'Trebuchet MS', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 4rem;

  /* Panels */
  --panel-border: 3px solid var(--ink);
  --panel-shadow: 6px 6px 0 var(--ink);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
}

/* === App Shell === */
.app {
  min-height: 100vh;
  background:
    radial-gradient(var(--ink-faint) 1px, transparent 1px) 0 0 / 12px 12px,
    var(--paper);
  color: var(--ink);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.app.hacker-mode {
  font-family: var(--font-mono);
}

/* === Typography === */
.manga-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  letter-spacing: 0.05em;
  text-transform: uppercase;
  -webkit-text-stroke: 1px var(--ink);
  text-shadow: 3px 3px 0 var(--accent);
  margin-bottom: 1.5rem;
}

.manga-title.accent,
.panel-title.accent {
  color: var(--accent);
}

.panel-title {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  letter-spacing: 0.05em;
  margin-bottom: 0.75rem;
}

/* === Panels === */
.panel {
  background: var(--paper);
  border: var(--panel-border);
  box-shadow: var(--panel-shadow);
  padding: 1.5rem;
}

section {
  padding: 5rem 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

/* === Buttons === */
.btn-panel,
.btn-action,
.btn-speech,
.btn-ghost {
  font-family: var(--font-display);
  font-size: var(--text-base);
  letter-spacing: 0.05em;
  padding: 0.6rem 1.4rem;
  cursor: pointer;
  text-decoration: none;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-panel {
  background: var(--paper);
  color: var(--ink);
  border: var(--panel-border);
  box-shadow: 4px 4px 0 var(--ink);
}

.btn-action {
  background: var(--accent);
  color: var(--paper);
  border: var(--panel-border);
  box-shadow: 4px 4px 0 var(--ink);
}

.btn-speech {
  background: var(--paper);
  color: var(--ink);
  border: var(--panel-border);
  border-radius: 2rem;
}

.btn-ghost {
  background: transparent;
  color: var(--ink-soft);
  border: none;
}

.btn-panel:hover:not(:disabled),
.btn-action:hover:not(:disabled),
.btn-speech:hover:not(:disabled) {
  transform: translate(-2px, -2px);
  box-shadow: 6px 6px 0 var(--ink);
}

.btn-ghost:hover {
  color: var(--accent);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.icon-btn,
.close-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: var(--panel-border);
  border-radius: 50%;
  background: var(--paper);
  color: var(--ink);
  font-size: var(--text-lg);
  cursor: pointer;
}

.close-btn {
  width: 1.75rem;
  height: 1.75rem;
  border-width: 2px;
  font-size: var(--text-base);
}

/* === Form Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1rem;
}

.input-label {
  font-family: var(--font-display);
  font-size: var(--text-sm);
  letter-spacing: 0.05em;
}

.input-field {
  font-family: inherit;
  font-size: var(--text-base);
  padding: 0.6rem 0.8rem;
  background: var(--paper);
  color: var(--ink);
  border: var(--panel-border);
  outline: none;
}

.input-field:focus {
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.input-field.textarea {
  min-height: 8rem;
  resize: vertical;
}

.form-error {
  color: var(--danger);
  font-weight: bold;
  margin-bottom: 1rem;
}

/* === Technology Pills === */
.tech-pills,
.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  font-size: var(--text-xs);
  padding: 0.2rem 0.7rem;
  border: 2px solid var(--ink);
  border-radius: 1rem;
  background: var(--paper);
  color: var(--ink);
  cursor: pointer;
}

.pill.selected {
  background: var(--ink);
  color: var(--paper);
}

.pill-clear {
  border: none;
  background: transparent;
  color: inherit;
  font-size: var(--text-lg);
  cursor: pointer;
}

/* === Mode Badge === */
.mode-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.25rem 0.8rem;
  border: 2px solid var(--ink);
  border-radius: 1rem;
  background: var(--paper);
  color: var(--ink);
  font-size: var(--text-xs);
  cursor: pointer;
}

.mode-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--accent);
}

.mode-dot.blinking {
  animation: blink 1s steps(2, start) infinite;
}

@keyframes blink {
  to { visibility: hidden; }
}

/* === Progress Bar === */
.progress-bar {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-xs);
}

.progress-track {
  flex: 1;
  height: 0.75rem;
  border: 2px solid var(--ink);
  background: var(--paper-shade);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: repeating-linear-gradient(
    45deg, var(--accent), var(--accent) 6px, var(--highlight) 6px, var(--highlight) 12px
  );
  transition: width var(--transition-normal);
}

.progress-label,
.progress-value {
  font-family: var(--font-display);
  letter-spacing: 0.05em;
}

/* === Speech Bubbles === */
.bubble {
  position: relative;
  display: inline-block;
  padding: 0.8rem 1.2rem;
  background: var(--paper);
  border: var(--panel-border);
  border-radius: 1.5rem;
}

.bubble::after {
  content: '';
  position: absolute;
  bottom: -14px;
  border: 7px solid transparent;
  border-top-color: var(--ink);
}

.bubble.tail-left::after { left: 1.5rem; }
.bubble.tail-right::after { right: 1.5rem; }

.bubble.shout {
  border-radius: 0;
  clip-path: polygon(0 10%, 8% 0, 92% 0, 100% 10%, 100% 90%, 92% 100%, 8% 100%, 0 90%);
  font-family: var(--font-display);
}

.bubble.shout::after { display: none; }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  z-index: 200;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  min-width: 260px;
  max-width: 360px;
  padding: 0.9rem 1rem;
  background: var(--paper);
  border: var(--panel-border);
  box-shadow: var(--panel-shadow);
  animation: toast-in var(--transition-normal);
}

.toast-text { flex: 1; }

.toast-title {
  font-family: var(--font-display);
  letter-spacing: 0.05em;
  color: var(--accent);
}

.toast-body { font-size: var(--text-sm); }

@keyframes toast-in {
  from { transform: translateX(120%); }
  to { transform: translateX(0); }
}

/* === Loading Screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2rem;
  background: var(--paper);
  z-index: 300;
}

.loading-progress { width: min(480px, 80vw); }
.loading-caption { min-height: 3.5rem; }

.loading-hint {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.loading-scale {
  animation: loading-pulse 1.2s ease-in-out infinite;
}

@keyframes loading-pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.05); }
}

.ink-splash {
  position: absolute;
  width: 180px;
  height: 180px;
  border-radius: 50%;
  background: var(--ink);
  opacity: 0;
  pointer-events: none;
}

.ink-splash.splash-0 {
  top: 20%;
  left: 15%;
  animation: splash-a 0.6s ease-out;
}

.ink-splash.splash-1 {
  bottom: 20%;
  right: 15%;
  animation: splash-b 0.6s ease-out;
}

@keyframes splash-a {
  from { transform: scale(0.2); opacity: 0.8; }
  to { transform: scale(1.4); opacity: 0; }
}

@keyframes splash-b {
  from { transform: scale(0.2) rotate(20deg); opacity: 0.8; }
  to { transform: scale(1.4) rotate(20deg); opacity: 0; }
}

.loading-dots {
  display: flex;
  gap: 0.5rem;
  justify-content: center;
}

.loading-dots span {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--ink);
  animation: loading-pulse 0.9s ease-in-out infinite;
}

.loading-dots span:nth-child(2) { animation-delay: 0.15s; }
.loading-dots span:nth-child(3) { animation-delay: 0.3s; }

.project-loading {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

/* === Navigation === */
.nav-bar {
  position: sticky;
  top: 0;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.75rem 2rem;
  background: var(--paper);
  border-bottom: var(--panel-border);
  z-index: 100;
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  list-style: none;
}

.nav-link {
  background: none;
  border: none;
  color: var(--ink);
  font-family: var(--font-display);
  font-size: var(--text-base);
  letter-spacing: 0.05em;
  cursor: pointer;
  text-decoration: none;
}

.nav-link.active {
  color: var(--accent);
  text-decoration: underline 3px;
}

.nav-menu-toggle {
  display: none;
  background: none;
  border: none;
  font-size: var(--text-xl);
  color: var(--ink);
  cursor: pointer;
}

.exp-bar {
  position: sticky;
  top: 3.6rem;
  padding: 0.25rem 2rem;
  background: var(--paper);
  z-index: 99;
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.speed-lines {
  position: absolute;
  inset: 0;
  background: repeating-conic-gradient(
    from 0deg at 50% 50%, var(--ink-faint) 0deg 2deg, transparent 2deg 9deg
  );
  pointer-events: none;
}

.hero-panel {
  position: relative;
  text-align: center;
  max-width: 720px;
}

.hero-greeting {
  font-size: var(--text-lg);
  color: var(--ink-soft);
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
}

.sound-effect {
  position: absolute;
  top: -2rem;
  right: -1rem;
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  color: var(--accent);
  transform: rotate(-12deg) scale(0);
  transition: transform var(--transition-fast);
  pointer-events: none;
}

.sound-effect.visible {
  transform: rotate(-12deg) scale(1);
}

/* === About / Character === */
.about-grid {
  display: grid;
  grid-template-columns: minmax(240px, 1fr) 2fr;
  gap: 2rem;
}

.portrait-panel { position: relative; }

.portrait {
  width: 100%;
  border: var(--panel-border);
  filter: grayscale(0.4) contrast(1.1);
  transition: filter var(--transition-normal);
}

.portrait.maxed {
  filter: none;
  box-shadow: 0 0 0 4px var(--highlight), 0 0 24px var(--accent-glow);
}

.portrait-overlay { margin-top: 1rem; }

.style-switcher {
  display: flex;
  gap: 0.5rem;
  margin: 1rem 0;
}

.character-description {
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

.about-text p + p { margin-top: 0.75rem; }

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  text-decoration: none;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.project-card:hover { transform: rotate(-1deg) translateY(-4px); }

.project-cover {
  position: relative;
  aspect-ratio: 16 / 10;
  overflow: hidden;
  border: 2px solid var(--ink);
}

.project-cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-cover-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  padding: 0.75rem;
  background: linear-gradient(transparent 50%, var(--ink-soft));
  color: var(--paper);
  font-family: var(--font-display);
}

.showcase-more {
  display: flex;
  justify-content: center;
  margin-top: 2.5rem;
}

.quick-view-backdrop {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--ink-soft);
  z-index: 150;
}

.quick-view {
  position: relative;
  width: min(720px, 92vw);
  max-height: 88vh;
  overflow-y: auto;
}

.quick-view-cover {
  width: 100%;
  border: 2px solid var(--ink);
  margin: 1rem 0;
}

.quick-view-heading {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.quick-view-links,
.project-links,
.contact-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 1.5rem;
}

/* === All Projects === */
.all-projects,
.project-details {
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem 2rem 5rem;
}

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  flex-wrap: wrap;
  margin-bottom: 2rem;
}

.back-link { margin-bottom: 1.5rem; }

.filter-menu { margin-bottom: 2rem; }

.active-filter {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.2rem 0.8rem;
  margin-bottom: 1.5rem;
  background: var(--ink);
  color: var(--paper);
  border-radius: 1rem;
}

.empty-state {
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

/* === Project Details === */
.project-details .panel { margin-bottom: 2rem; }

.project-hero-image {
  width: 100%;
  max-height: 420px;
  object-fit: cover;
  border: 2px solid var(--ink);
  margin-bottom: 1.5rem;
}

.project-description {
  font-size: var(--text-lg);
  margin-bottom: 1rem;
}

.project-story {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

.gallery { text-align: center; }

.gallery.empty {
  padding: 2rem;
  color: var(--ink-soft);
}

.gallery-frame {
  position: relative;
  border: 2px solid var(--ink);
}

.gallery-frame img {
  display: block;
  width: 100%;
  max-height: 480px;
  object-fit: contain;
  background: var(--paper-shade);
}

.gallery-prev,
.gallery-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
}

.gallery-prev { left: 0.75rem; }
.gallery-next { right: 0.75rem; }

.gallery-dots {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.gallery-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: 2px solid var(--ink);
  background: var(--paper);
  cursor: pointer;
}

.gallery-dot.active { background: var(--accent); }

.gallery-caption {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.project-neighbors {
  display: flex;
  justify-content: space-between;
  gap: 2rem;
  margin-top: 3rem;
}

.neighbor-link {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  text-decoration: none;
  flex: 1;
}

.neighbor-link:last-child { text-align: right; }

.neighbor-label {
  font-size: var(--text-xs);
  color: var(--ink-soft);
  text-transform: uppercase;
}

.neighbor-title { font-family: var(--font-display); }

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 2rem;
}

.contact-side {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.social-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.availability dt {
  font-family: var(--font-display);
  letter-spacing: 0.05em;
  margin-top: 0.5rem;
}

.availability dd { color: var(--ink-soft); }

/* === Footer === */
.site-footer {
  text-align: center;
  padding: 2rem;
  border-top: var(--panel-border);
}

.footer-hint {
  font-size: var(--text-xs);
  color: var(--ink-soft);
  margin-top: 0.25rem;
}

.scroll-top {
  position: fixed;
  left: 1.5rem;
  bottom: 1.5rem;
  z-index: 120;
}

/* === Hacker Mode Overrides === */
.hacker-mode .manga-title {
  -webkit-text-stroke: 0;
  text-shadow: 0 0 12px var(--accent-glow);
}

.hacker-mode .panel,
.hacker-mode .toast {
  box-shadow: 0 0 16px var(--accent-glow);
}

.hacker-mode .speed-lines {
  background: repeating-linear-gradient(
    0deg, var(--ink-faint) 0 1px, transparent 1px 4px
  );
}

.hacker-mode .portrait {
  filter: hue-rotate(90deg) saturate(1.4);
}

.btn-panel.hacker,
.btn-action.hacker,
.btn-speech.hacker {
  border-radius: 0;
  box-shadow: 0 0 8px var(--accent-glow);
}

.gallery.hacker .gallery-frame img {
  filter: saturate(0.6) hue-rotate(60deg);
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-menu-toggle { display: block; }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 2rem;
    background: var(--paper);
    border-bottom: var(--panel-border);
  }

  .nav-bar.open .nav-links { display: flex; }

  .about-grid,
  .contact-grid,
  .project-story {
    grid-template-columns: 1fr;
  }

  .manga-title { font-size: var(--text-xl); }
}
"#;
