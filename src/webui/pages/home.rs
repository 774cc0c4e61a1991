//! Home page

use rocket::get;
use rocket::http::ContentType;

use super::render_page;

#[get("/")]
pub async fn get_home() -> (ContentType, String) {
    let page = render_page("", HTML_HOME);

    (ContentType::HTML, page)
}

const HTML_HOME: &'static str = r#"
<div class="section">
    <h1>Download a video</h1>
    <form id="download-form">
        <input type="text" id="video-url" placeholder="Paste YouTube URL here..." />
        <button type="submit">Download</button>
    </form>
    <div id="status-banner" class="status idle"></div>
    <div id="progress" class="progress hidden"><div class="progress-fill"></div></div>
</div>

<div class="section">
    <h2>Downloaded Files</h2>
    <ul id="files-list">
        <!-- File entries will be populated here by JavaScript -->
    </ul>
</div>

<script>

function setStatus(state, message) {
    const banner = document.getElementById('status-banner');
    banner.className = 'status ' + state;
    banner.textContent = message;

    // The bar is cosmetic, there is no real progress reporting
    const progress = document.getElementById('progress');
    if (state === 'loading') {
        progress.classList.remove('hidden');
        progress.querySelector('.progress-fill').style.width = '45%';
    } else {
        progress.classList.add('hidden');
    }
}

async function fetchFiles() {
    try {
        const response = await fetch('/api/download');
        if (!response.ok) throw new Error('Network response was not ok');

        const data = await response.json();
        const filesList = document.getElementById('files-list');
        filesList.innerHTML = ''; // Clear the existing list

        (data.files || []).forEach(name => {
            const li = document.createElement('li');
            const link = '/downloads/' + encodeURIComponent(name);
            li.innerHTML = `<a href="${link}" download>${name}</a>`;
            filesList.appendChild(li);
        });
    } catch (error) {
        console.error('Error fetching files:', error);
    }
}

document.getElementById('download-form').addEventListener('submit', async (event) => {
    event.preventDefault();

    const input = document.getElementById('video-url');
    const url = input.value;
    if (!url.trim()) {
        setStatus('error', 'Please enter a YouTube URL');
        return;
    }

    setStatus('loading', 'Downloading video...');

    try {
        const response = await fetch('/api/download', {
            method: 'POST',
            headers: {
                'Content-Type': 'application/json'
            },
            body: JSON.stringify({ url: url })
        });

        const data = await response.json();

        if (!response.ok) {
            setStatus('error', data.error || 'Download failed');
            return;
        }

        setStatus('success', 'Video downloaded successfully!');
        input.value = '';
        input.focus();

        // Refresh file list once the file has settled on disk
        setTimeout(fetchFiles, 1000);
    } catch (error) {
        setStatus('error', 'Connection error. Make sure the server is running.');
    }
});

fetchFiles(); // Initial fetch to load files right away
</script>
"#;
