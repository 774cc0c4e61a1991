//! Style.css, default stylesheet

use rocket::get;
use rocket::http::ContentType;

#[get("/style.css")]
pub async fn style_css() -> (ContentType, &'static str) {
    (ContentType::CSS, CSS_STYLE)
}

const CSS_STYLE: &'static str = r#"
/* style.css - Dark Theme with Red Accent */

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body, html {
    height: 100%;
    font-family: Arial, sans-serif;
    background-color: #1a1a1a; /* Dark background for the entire page */
    color: #e0e0e0; /* Light text color */
}

.container {
    max-width: 720px;
    margin: 0 auto;
    padding: 0 20px;
}

/* Header - Top Bar */
.top-bar {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 6px;
    padding: 30px 0 20px 0;
    border-bottom: 1px solid #333; /* Border to separate top bar */
}

.logo {
    font-size: 1.8em;
    font-weight: bold;
    color: #ff6b6b; /* Red accent color for logo */
}

.tagline {
    font-size: 0.9em;
    color: #999;
}

/* Main Content */
.content {
    padding: 20px 0;
}

.section {
    margin-bottom: 30px;
}

.section h1, .section h2 {
    margin-bottom: 12px;
    color: #f0f0f0;
}

/* Download form */
#download-form {
    display: flex;
    gap: 10px;
}

#download-form input[type="text"] {
    flex: 1;
    padding: 12px;
    background-color: #2a2a2a;
    border: 1px solid #444;
    border-radius: 4px;
    color: #e0e0e0;
}

#download-form input[type="text"]:focus {
    outline: none;
    border-color: #ff6b6b;
}

#download-form button {
    padding: 12px 24px;
    background-color: #ff6b6b;
    border: none;
    border-radius: 4px;
    color: #1a1a1a;
    font-weight: bold;
    cursor: pointer;
}

#download-form button:hover {
    background-color: #ff8585;
}

/* Status banner */
.status {
    margin-top: 12px;
    padding: 0;
    min-height: 1.2em;
}

.status.loading {
    color: #b0c7ff;
}

.status.success {
    color: #7fdc8a;
}

.status.error {
    color: #ff6b6b;
}

/* Indeterminate progress bar */
.progress {
    margin-top: 8px;
    height: 6px;
    background-color: #2a2a2a;
    border-radius: 3px;
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    width: 0;
    background-color: #b0c7ff;
    transition: width 0.3s ease;
    animation: pulse 1.2s infinite alternate;
}

@keyframes pulse {
    from { opacity: 0.5; }
    to { opacity: 1; }
}

.hidden {
    display: none;
}

/* Downloaded files */
#files-list {
    list-style: none;
}

#files-list li {
    padding: 10px 12px;
    margin-bottom: 6px;
    background-color: #222;
    border: 1px solid #333;
    border-radius: 4px;
}

#files-list a {
    color: #b0c7ff;
    text-decoration: none;
}

#files-list a:hover {
    text-decoration: underline;
}
"#;
