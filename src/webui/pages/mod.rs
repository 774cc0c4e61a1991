mod home;
pub use home::*;

fn render_page(head: &str, body: &str) -> String {
    let mut page = String::with_capacity(1024);
    page.push_str(TMPL_1);
    page.push_str(head);
    page.push_str(TMPL_2);
    page.push_str(body);
    page.push_str(TMPL_3);
    page
}

const TMPL_1: &'static str = r###"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Tubegrab</title>
    <link rel="stylesheet" href="/static/style.css" type="text/css">
"###;

const TMPL_2: &'static str = r###"
</head>
<body>
    <div class="container">
        <header class="top-bar">
            <div class="logo">Tubegrab</div>
            <div class="tagline">Download your favorite videos in the best quality</div>
        </header>
        <main class="content">
"###;

const TMPL_3: &'static str = r###"
        </main>
    </div>
</body>
</html>
"###;
