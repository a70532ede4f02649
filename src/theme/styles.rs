//! Global CSS styles for the Barantrum City Archive.
//!
//! Terminal-noir: near-black page, archive yellow frames, skewed tabs.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUND */
  --near-black: #050505;
  --panel: #121212;
  --panel-raised: #1a1a1a;
  --line: #333333;

  /* SIGNAL */
  --archive-yellow: #FCEE0A;
  --gold: #FFD700;
  --glitch-cyan: #00F0FF;
  --glitch-red: #FF003C;
  --ok-green: #00FF41;

  /* PAPER (personnel file) */
  --paper: #f0f0f0;
  --ink: #000000;

  /* TEXT */
  --text-primary: #d1d5db;
  --text-muted: #9ca3af;
  --text-dim: #6b7280;

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --font-tech: 'Share Tech Mono', 'JetBrains Mono', monospace;

  /* Transitions */
  --transition-fast: 100ms ease;
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
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--near-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.35; }
}

/* === Background Grid === */
.grid-bg {
  position: fixed;
  inset: 0;
  pointer-events: none;
}

/* === Shell === */
.archive-shell {
  position: relative;
  min-height: 100vh;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  overflow: hidden;
}

.archive-header {
  position: relative;
  z-index: 1;
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  gap: 1rem;
  padding-bottom: 1rem;
  margin-bottom: 1.5rem;
  border-bottom: 2px solid var(--gold);
}

.archive-title {
  font-size: 3.5rem;
  font-weight: 900;
  font-style: italic;
  letter-spacing: -0.05em;
  color: var(--archive-yellow);
  text-shadow: 2px 2px 0 #ffffff;
}

.archive-protocol {
  font-family: var(--font-tech);
  font-size: 0.875rem;
  letter-spacing: 0.2em;
  color: #ffffff;
}

.archive-status {
  display: flex;
  gap: 1rem;
  font-family: var(--font-tech);
  font-size: 0.75rem;
  color: var(--gold);
}

.status-readout:first-child {
  animation: pulse 2s infinite;
}

/* === Navigation === */
.archive-nav {
  position: relative;
  z-index: 1;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 2rem;
}

.nav-btn {
  padding: 0.5rem 1.5rem;
  font-family: var(--font-mono);
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  transform: skewX(-15deg);
  background: transparent;
  color: var(--gold);
  border: 2px solid var(--gold);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.nav-btn:hover,
.nav-btn.active {
  background: var(--archive-yellow);
  color: var(--ink);
  border-color: var(--archive-yellow);
}

.nav-btn.active {
  box-shadow: 0 0 15px rgba(252, 238, 10, 0.5);
}

.nav-btn-label {
  display: block;
  transform: skewX(15deg);
}

/* === Content Frame === */
.archive-main {
  position: relative;
  z-index: 1;
  flex-grow: 1;
  margin-left: 1rem;
  padding-left: 2rem;
  border-left: 2px solid var(--archive-yellow);
}

.rail-corner {
  position: absolute;
  left: -2px;
  width: 0.5rem;
  height: 4rem;
  background: var(--archive-yellow);
}

.rail-corner.top { top: 0; }
.rail-corner.bottom { bottom: 0; }

.content-frame {
  max-width: 80rem;
  margin: 0 auto;
}

.content-header {
  position: relative;
  margin-bottom: 2rem;
}

.view-watermark {
  position: absolute;
  right: 0;
  top: -2.5rem;
  z-index: -1;
  font-size: 6rem;
  font-weight: 900;
  color: #222222;
  opacity: 0.5;
  pointer-events: none;
  user-select: none;
}

.content-rule {
  width: 5rem;
  height: 4px;
  background: var(--archive-yellow);
}

.archive-footer {
  position: relative;
  z-index: 1;
  margin-top: 3rem;
  padding-top: 1rem;
  border-top: 1px solid var(--line);
  text-align: center;
  font-family: var(--font-tech);
  font-size: 0.75rem;
  color: var(--text-dim);
}

.view-hint {
  font-size: 0.75rem;
  color: var(--text-dim);
  margin-bottom: 1rem;
}

.card-hint {
  display: block;
  margin-top: 0.5rem;
  font-size: 0.75rem;
  color: var(--text-dim);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.card-hint.centered { text-align: center; }

/* === Glitch Text === */
.glitch {
  position: relative;
  display: inline-block;
}

.glitch-base {
  position: relative;
  z-index: 1;
}

.glitch-layer {
  position: absolute;
  top: 0;
  left: 0;
  z-index: 0;
  width: 100%;
  opacity: 0;
  user-select: none;
  transition: all var(--transition-fast);
}

.glitch-cyan { color: var(--glitch-cyan); }
.glitch-red { color: var(--glitch-red); }

.glitch:hover .glitch-cyan,
.association-card:hover .glitch-cyan,
.personnel-card:hover .glitch-cyan {
  opacity: 0.7;
  transform: translateX(-2px);
}

.glitch:hover .glitch-red,
.association-card:hover .glitch-red,
.personnel-card:hover .glitch-red {
  opacity: 0.7;
  transform: translateX(2px);
}

/* === Accent Badge === */
.accent-badge {
  font-size: 0.75rem;
  padding: 0.25rem 0.5rem;
}

/* === Intro === */
.intro-view {
  max-width: 56rem;
  animation: fade-in 500ms ease-out;
}

.intro-banner {
  display: inline-block;
  margin-bottom: 1.5rem;
  padding: 1rem;
  border: 1px solid var(--archive-yellow);
  background: rgba(113, 63, 18, 0.1);
}

.intro-banner h2 {
  font-size: 1rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--archive-yellow);
}

.intro-terminal {
  position: relative;
  min-height: 300px;
  padding: 1.5rem;
  font-family: var(--font-tech);
  font-size: 1.25rem;
  line-height: 1.7;
  color: #ffffff;
  white-space: pre-wrap;
  background: rgba(0, 0, 0, 0.8);
  border-left: 4px solid var(--gold);
  box-shadow: 0 0 20px rgba(252, 238, 10, 0.1);
  overflow: hidden;
}

.terminal-scanline {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 2px;
  background: var(--gold);
  opacity: 0.5;
  animation: pulse 2s infinite;
}

.type-cursor {
  display: inline-block;
  width: 0.75rem;
  height: 1.25rem;
  margin-left: 0.25rem;
  vertical-align: text-bottom;
  background: var(--archive-yellow);
}

.type-cursor.idle {
  animation: pulse 1s infinite;
}

/* === Districts === */
.district-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(28rem, 1fr));
  gap: 1.5rem;
  padding-bottom: 3rem;
}

.district-card {
  position: relative;
  display: flex;
  flex-direction: column;
  padding: 1.5rem;
  background: var(--panel);
  border: 1px solid #1f2937;
  transition: all var(--transition-normal);
}

.district-card:hover {
  border-color: var(--archive-yellow);
  box-shadow: 0 0 15px rgba(252, 238, 10, 0.15);
}

.district-corner {
  position: absolute;
  top: 0;
  right: 0;
  border-top: 40px solid transparent;
  border-right: 40px solid #1f2937;
  transition: border-color var(--transition-normal);
}

.district-card:hover .district-corner {
  border-right-color: var(--archive-yellow);
}

.district-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid #1f2937;
}

.district-id {
  font-size: 2.25rem;
  font-weight: 900;
  font-style: italic;
  color: #ffffff;
}

.district-card:hover .district-id { color: var(--archive-yellow); }

.district-sector {
  font-size: 0.625rem;
  padding: 0.25rem 0.5rem;
  color: var(--text-muted);
  background: var(--ink);
  border: 1px solid #374151;
}

.district-name {
  margin-bottom: 0.75rem;
  font-size: 1.25rem;
  color: var(--gold);
}

.district-description {
  flex-grow: 1;
  margin-bottom: 1rem;
  font-family: var(--font-tech);
  font-size: 0.875rem;
  line-height: 1.75;
  color: var(--text-muted);
}

.district-jurisdiction {
  margin-top: auto;
  padding-top: 1rem;
  border-top: 1px dashed #374151;
}

.jurisdiction-label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  color: #ffffff;
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

/* === Associations === */
.association-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding-bottom: 3rem;
}

.association-card {
  position: relative;
  padding: 1.5rem;
  overflow: hidden;
  background: rgba(23, 23, 23, 0.8);
  border-left: 4px solid;
  cursor: pointer;
  transition: all var(--transition-normal);
}

.association-card:hover {
  background: #171717;
  transform: translateX(0.5rem);
}

.association-card:hover .card-hint,
.personnel-card:hover .card-hint { opacity: 1; }

.association-watermark {
  position: absolute;
  right: -1rem;
  top: -1.5rem;
  font-size: 8rem;
  font-weight: 900;
  color: rgba(255, 255, 255, 0.05);
  pointer-events: none;
  user-select: none;
}

.association-row {
  position: relative;
  z-index: 1;
  display: flex;
  gap: 1.5rem;
  align-items: flex-start;
}

.sector-plate {
  flex-shrink: 0;
  width: 6rem;
  height: 6rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  color: var(--ink);
  font-weight: 900;
  transform: skewX(-10deg);
  box-shadow: 5px 5px 0 rgba(255, 255, 255, 0.2);
}

.sector-plate-label {
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.sector-plate-code { font-size: 2.25rem; }

.association-info { flex-grow: 1; }

.association-title-row {
  display: flex;
  align-items: baseline;
  gap: 1rem;
  margin-bottom: 0.5rem;
}

.association-name {
  font-size: 1.5rem;
  font-weight: 700;
  color: #ffffff;
  letter-spacing: 0.05em;
}

.association-role {
  font-family: var(--font-tech);
  font-size: 0.875rem;
  padding: 0.25rem 0.5rem;
}

.association-description {
  max-width: 48rem;
  margin-top: 0.5rem;
  padding-top: 0.5rem;
  border-top: 1px solid #1f2937;
  color: var(--text-primary);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.association-card:hover .association-description {
  -webkit-line-clamp: unset;
}

.association-meta {
  flex-shrink: 0;
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 0.5rem;
  font-size: 0.75rem;
}

.meta-chip {
  padding: 0.25rem 0.5rem;
  color: #ffffff;
  background: var(--ink);
  border: 1px solid rgba(255, 255, 255, 0.1);
}

/* === Personnel === */
.personnel-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
  gap: 1.5rem;
  padding-bottom: 3rem;
}

.personnel-card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1rem;
  overflow: hidden;
  background: rgba(0, 0, 0, 0.8);
  border: 1px solid #374151;
  cursor: pointer;
  transition: all 200ms ease;
}

.personnel-card:hover {
  border-color: currentColor;
  transform: translateY(-0.25rem);
}

.personnel-id {
  position: absolute;
  top: 0;
  right: 0;
  padding: 0.25rem 0.5rem;
  font-size: 0.625rem;
  color: var(--text-muted);
  background: #1f2937;
}

.personnel-card:hover .personnel-id {
  background: currentColor;
  color: var(--ink);
}

.personnel-head {
  display: flex;
  gap: 1rem;
  align-items: flex-start;
  padding-bottom: 1rem;
  border-bottom: 1px solid #1f2937;
  color: var(--text-primary);
}

.personnel-avatar {
  width: 4rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2rem;
  color: #4b5563;
  background: #111827;
  border: 1px solid #374151;
}

.personnel-name {
  font-size: 1.25rem;
  font-weight: 700;
  color: #ffffff;
}

.personnel-affiliation {
  margin-top: 0.25rem;
  font-family: var(--font-tech);
  font-size: 0.875rem;
}

.personnel-location {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--text-dim);
}

.personnel-label {
  display: block;
  margin-bottom: 0.25rem;
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
}

.personnel-personality {
  font-size: 0.875rem;
  color: var(--text-primary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

/* === Glossary === */
.glossary-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(30rem, 1fr));
  gap: 2rem;
  padding-bottom: 3rem;
}

.glossary-heading {
  display: inline-block;
  margin-bottom: 1.5rem;
  padding-bottom: 0.5rem;
  font-size: 1.25rem;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--archive-yellow);
  border-bottom: 2px solid var(--archive-yellow);
}

.glossary-terms {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.glossary-term {
  padding: 1rem;
  background: var(--panel-raised);
  border-left: 2px solid #374151;
  transition: all 200ms ease;
}

.glossary-term:hover {
  background: #222222;
  border-left-color: var(--gold);
}

.glossary-term h4 {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  font-size: 1.125rem;
  color: #ffffff;
}

.glossary-term:hover .term-label { color: var(--archive-yellow); }

.threat-marker {
  font-size: 0.875rem;
  color: var(--archive-yellow);
}

.term-definition {
  padding-top: 0.5rem;
  font-family: var(--font-tech);
  font-size: 0.875rem;
  color: var(--text-muted);
  border-top: 1px solid #1f2937;
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
  overflow-y: auto;
  animation: fade-in 300ms ease-out;
}

.modal-overlay.dark { background: rgba(0, 0, 0, 0.9); }

.close-btn {
  position: absolute;
  z-index: 30;
  padding: 0.5rem;
  font-size: 1.25rem;
  line-height: 1;
  background: transparent;
  border: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.close-btn.modal-close { top: 1rem; right: 1rem; }
.close-btn.modal-close:hover { background: rgba(255, 255, 255, 0.1); }
.close-btn.file-close { top: 0.5rem; right: 0.5rem; color: var(--ink); }
.close-btn.file-close:hover { background: rgba(0, 0, 0, 0.1); }

/* Association dossier */
.association-modal {
  position: relative;
  width: 100%;
  max-width: 48rem;
  padding: 2rem;
  overflow: hidden;
  background: #0a0a0a;
  border: 2px solid;
}

.modal-hatching {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  pointer-events: none;
  background-size: 10px 10px;
}

.modal-body {
  position: relative;
  z-index: 1;
}

.association-modal-header {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
  padding-bottom: 1rem;
  border-bottom: 1px solid;
}

.association-emblem {
  padding: 1rem;
  font-size: 2.5rem;
  line-height: 1;
  background: var(--ink);
  border: 1px solid;
}

.association-modal-name {
  font-size: 2.25rem;
  font-weight: 900;
  letter-spacing: -0.05em;
}

.association-modal-tags {
  display: flex;
  gap: 0.5rem;
  margin-top: 0.5rem;
  font-family: var(--font-tech);
  font-size: 0.875rem;
}

.tag-muted {
  padding: 0.125rem 0.5rem;
  background: rgba(255, 255, 255, 0.1);
}

.tag-outlined {
  padding: 0.125rem 0.5rem;
  border: 1px solid;
}

.association-modal-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 2rem;
}

.modal-section-title {
  margin-bottom: 0.5rem;
  font-size: 1.125rem;
  font-weight: 700;
  color: #ffffff;
}

.association-modal-description {
  font-size: 1.125rem;
  font-weight: 300;
  line-height: 1.7;
}

.system-note {
  margin-top: 2rem;
  padding: 1rem;
  background: rgba(255, 255, 255, 0.05);
  border: 1px dashed;
}

.system-note-label {
  margin-bottom: 0.25rem;
  font-family: var(--font-tech);
  font-size: 0.75rem;
  color: var(--text-dim);
}

.system-note-text {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.association-modal-side {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding-left: 1.5rem;
  border-left: 1px solid;
}

.side-label {
  display: block;
  margin-bottom: 0.25rem;
  font-family: var(--font-tech);
  font-size: 0.75rem;
  color: var(--text-dim);
}

.side-grade {
  font-size: 1.5rem;
  font-weight: 900;
}

.side-value { color: #ffffff; }

.side-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--ok-green);
}

.status-pulse {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--ok-green);
  animation: pulse 2s infinite;
}

/* Personnel file */
.personnel-file {
  position: relative;
  width: 100%;
  max-width: 42rem;
  color: var(--ink);
  background: var(--paper);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  transform: rotate(1deg);
  transition: transform var(--transition-normal);
}

.personnel-file:hover { transform: rotate(0deg); }

.stamp-top-secret {
  position: absolute;
  top: 2rem;
  right: 2rem;
  z-index: 20;
  padding: 0.5rem;
  font-size: 1.25rem;
  font-weight: 900;
  color: #ff0000;
  border: 4px solid #ff0000;
  opacity: 0.8;
  transform: rotate(-15deg);
  pointer-events: none;
  user-select: none;
}

.file-body {
  position: relative;
  z-index: 10;
  padding: 3rem;
}

.file-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  margin-bottom: 2rem;
  padding-bottom: 1rem;
  border-bottom: 4px solid var(--ink);
}

.file-title {
  font-size: 1.875rem;
  font-weight: 900;
  text-transform: uppercase;
}

.file-record {
  margin-top: 0.25rem;
  font-family: var(--font-tech);
  font-size: 0.875rem;
  color: #4b5563;
}

.file-photo {
  width: 6rem;
  height: 8rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
  background: #f3f4f6;
  border: 2px dashed var(--text-muted);
}

.file-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem 3rem;
}

.file-field label {
  display: block;
  margin-bottom: 0.25rem;
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  color: var(--text-dim);
}

.file-field.wide { grid-column: span 2; }

.file-value {
  padding-bottom: 0.25rem;
  font-size: 1.125rem;
  border-bottom: 1px solid #d1d5db;
}

.file-value.large {
  font-size: 1.25rem;
  font-weight: 700;
}

.file-value.affiliation {
  display: inline-block;
  padding: 0 0.5rem;
  color: var(--ink);
  border-bottom: 2px solid;
}

.file-field.appearance {
  padding: 1rem;
  background: #e5e7eb;
  border: 1px solid #d1d5db;
}

.preformatted {
  font-family: var(--font-tech);
  font-size: 0.875rem;
  line-height: 1.7;
  white-space: pre-wrap;
}

.personality-quote {
  padding: 0.25rem 0 0.25rem 1rem;
  font-size: 0.875rem;
  font-style: italic;
  border-left: 4px solid var(--ink);
}

.admin-notes {
  position: relative;
  margin-top: 1rem;
}

.notes-label { color: #dc2626 !important; }

.notes-text {
  padding: 0.75rem;
  color: #1f2937;
  background: #fefce8;
  border: 1px solid #fef08a;
  transform: rotate(-1deg);
}

.file-field.resolve {
  margin-top: 1.5rem;
  padding: 1rem;
  background: #ffffff;
  border: 4px double var(--text-muted);
  transform: rotate(-1deg);
}

.resolve-header {
  margin-bottom: 0.5rem;
  padding-bottom: 0.5rem;
  text-align: center;
  border-bottom: 2px solid #1f2937;
}

.resolve-title {
  font-size: 1.125rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.resolve-sub {
  margin-left: 0.5rem;
  font-size: 0.75rem;
  color: var(--text-dim);
}

.resolve-quote {
  text-align: center;
  font-family: Georgia, serif;
  font-size: 1.5rem;
  font-weight: 700;
  color: #1f2937;
}

.file-footer {
  display: flex;
  justify-content: space-between;
  margin-top: 3rem;
  padding-top: 1rem;
  font-family: var(--font-tech);
  font-size: 0.625rem;
  text-transform: uppercase;
  color: var(--text-dim);
  border-top: 1px solid #d1d5db;
}

/* === Loading Screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: var(--near-black);
}

.loading-body {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.loading-emblem {
  position: relative;
  margin-bottom: 2rem;
}

.loading-glow {
  position: absolute;
  inset: 0;
  background: var(--archive-yellow);
  filter: blur(48px);
  opacity: 0.2;
  animation: pulse 2s infinite;
}

.loading-icon {
  position: relative;
  font-size: 5rem;
  color: var(--archive-yellow);
}

.loading-title {
  margin-bottom: 0.5rem;
  font-size: 6rem;
  font-weight: 900;
  letter-spacing: -0.05em;
  color: #ffffff;
  text-shadow: 4px 4px 0 var(--gold);
}

.loading-subtitle {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 3rem;
  font-family: var(--font-tech);
  letter-spacing: 0.3em;
  color: var(--gold);
}

.loading-pip {
  width: 0.5rem;
  height: 0.5rem;
  background: #ffffff;
  animation: pulse 1s infinite;
}

.loading-track {
  position: relative;
  width: 24rem;
  height: 1rem;
  overflow: hidden;
  background: #111827;
  border: 1px solid var(--line);
}

.loading-fill {
  height: 100%;
  background: var(--archive-yellow);
  box-shadow: 0 0 15px var(--archive-yellow);
  transition: width 200ms ease-out;
}

.loading-status {
  display: flex;
  justify-content: space-between;
  width: 24rem;
  margin-top: 0.5rem;
  font-family: var(--font-tech);
  font-size: 0.625rem;
  text-transform: uppercase;
  color: var(--text-dim);
}

.loading-percent { color: var(--gold); }
"#;
