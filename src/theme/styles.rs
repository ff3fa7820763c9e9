//! Global CSS styles for Folio.
//!
//! White-wall gallery look: neutral ink on paper, rounded tiles, a dimmed
//! blurred overlay for the lightbox.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Text) */
  --ink: #171717;
  --ink-soft: #525252;
  --stone: #737373;

  /* PAPER (Backgrounds) */
  --paper: #ffffff;
  --paper-glass: rgba(255, 255, 255, 0.8);
  --tile-bg: #f5f5f5;
  --rule: #e5e5e5;

  /* OVERLAY */
  --scrim: rgba(0, 0, 0, 0.7);
  --caption-fade: linear-gradient(to top, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.1) 60%, transparent);

  /* Typography */
  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Layout */
  --page-width: 72rem;
  --radius: 1rem;

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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 30;
  background: var(--paper-glass);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--rule);
}

.site-header__inner,
.intro,
.gallery-section,
.site-footer__inner {
  max-width: var(--page-width);
  margin: 0 auto;
  padding-left: 1rem;
  padding-right: 1rem;
}

.site-header__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.site-header__brand {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
}

.site-header__name {
  font-size: 1.5rem;
  font-weight: 600;
  letter-spacing: -0.01em;
}

.site-header__tagline {
  font-size: 0.875rem;
  color: var(--stone);
}

.site-header__nav {
  display: flex;
  gap: 1.5rem;
  font-size: 0.875rem;
  color: var(--ink-soft);
}

.site-header__link {
  transition: color var(--transition-fast);
}

.site-header__link:hover {
  color: #000;
}

/* === Intro === */
.intro {
  padding-top: 2.5rem;
  padding-bottom: 1.5rem;
}

.intro__heading {
  font-size: 1.875rem;
  font-weight: 500;
  letter-spacing: -0.01em;
}

.intro__text {
  margin-top: 0.5rem;
  max-width: 42rem;
  color: var(--ink-soft);
}

/* === Gallery Grid === */
.gallery-section {
  padding-bottom: 4rem;
}

.gallery {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

@media (min-width: 640px) {
  .gallery { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .gallery { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
}

.gallery__empty {
  padding: 2rem 0;
  color: var(--stone);
  font-size: 0.875rem;
}

.tile {
  position: relative;
  display: block;
  width: 100%;
  overflow: hidden;
  border: none;
  border-radius: var(--radius);
  background: var(--tile-bg);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  cursor: pointer;
  text-align: left;
  font: inherit;
}

.tile:focus {
  outline: none;
}

.tile:focus-visible {
  box-shadow: 0 0 0 2px var(--ink);
}

.tile__frame {
  aspect-ratio: 4 / 3;
  width: 100%;
  overflow: hidden;
}

.tile__img {
  display: block;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.tile:hover .tile__img {
  transform: scale(1.03);
}

.tile__overlay {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 1rem;
  background: var(--caption-fade);
}

.tile__title {
  color: #fff;
  font-size: 1rem;
  font-weight: 500;
  line-height: 1.25;
}

.tile__caption {
  min-height: 1.25rem;
  color: rgba(255, 255, 255, 0.8);
  font-size: 0.875rem;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: var(--scrim);
  backdrop-filter: blur(4px);
}

.lightbox__panel {
  position: relative;
  width: 100%;
  max-width: 64rem;
}

.lightbox__frame {
  overflow: hidden;
  border-radius: var(--radius);
  background: #000;
}

.lightbox__img {
  display: block;
  width: 100%;
  height: auto;
  max-height: 80vh;
  object-fit: contain;
}

.lightbox__caption {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.25rem 0.75rem;
  margin-top: 0.75rem;
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.9);
}

.lightbox__title {
  font-weight: 500;
  color: #fff;
}

.icon-btn {
  border: none;
  background: transparent;
  cursor: pointer;
  font: inherit;
}

.close-btn {
  position: absolute;
  top: -2.5rem;
  right: 0;
  font-size: 1.75rem;
  line-height: 1;
  color: rgba(255, 255, 255, 0.9);
  transition: color var(--transition-fast);
}

.close-btn:hover {
  color: #fff;
}

/* === Footer === */
.site-footer {
  margin-top: 2.5rem;
  border-top: 1px solid var(--rule);
}

.site-footer__inner {
  padding-top: 2.5rem;
  padding-bottom: 2.5rem;
}

.site-footer__heading {
  font-size: 1.125rem;
  font-weight: 500;
}

.site-footer__text {
  margin-top: 0.5rem;
  max-width: 42rem;
  color: var(--ink-soft);
}

.site-footer__links {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
  margin-top: 1rem;
  font-size: 0.875rem;
}

.contact-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--rule);
  border-radius: 0.75rem;
  transition: box-shadow var(--transition-fast);
}

.contact-link:hover {
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08);
}

.icon {
  display: inline-block;
  width: 1rem;
  text-align: center;
}

.site-footer__copyright {
  margin-top: 2rem;
  font-size: 0.75rem;
  color: var(--stone);
}

/* === Motion === */
@keyframes rise {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes zoom {
  from { opacity: 0; transform: scale(0.98); }
  to { opacity: 1; transform: scale(1); }
}

.motion-rise {
  animation: rise 350ms ease-out both;
}

.motion-fade {
  animation: fade 200ms ease-out both;
}

.motion-zoom {
  animation: zoom 200ms ease-out both;
}

@media (prefers-reduced-motion: reduce) {
  .motion-rise, .motion-fade, .motion-zoom {
    animation: none;
  }
}

/* === Responsive === */
@media (max-width: 639px) {
  .site-header__nav { display: none; }
  .site-header__name { font-size: 1.25rem; }
  .intro__heading { font-size: 1.5rem; }
}
"#;
