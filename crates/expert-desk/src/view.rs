//! Server-side HTML for the single page.

use expert_prompt::Persona;
use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html::push_html};

use crate::page::{Outcome, PageView};

pub const PAGE_TITLE: &str = "Expert Desk LLM App";
pub const HEADING: &str = "🤖 Expert Desk × OpenAI";
pub const ANSWER_HEADING: &str = "回答";
pub const SPINNER_TEXT: &str = "回答生成中...";
pub const SUBMIT_LABEL: &str = "送信";
pub const PERSONA_LEGEND: &str = "専門家タイプを選択";
pub const QUESTION_LABEL: &str = "入力テキスト";
pub const QUESTION_PLACEHOLDER: &str = "例：転職の自己PRを添削して / 2泊3日の旅行プラン作って";
pub const FOOTER_CAUTION: &str = "※注意：.env（APIキー）はGitHubにアップロードしないでください。";

const INTRO: &str = r#"<h3>このアプリでできること</h3>
<ul>
<li>入力したテキストをLLMに渡して回答を表示します</li>
<li>ラジオボタンで「専門家タイプ」を選ぶと、LLMの役割（システムメッセージ）が切り替わります</li>
</ul>
<h3>使い方</h3>
<ol>
<li>専門家タイプを選ぶ</li>
<li>質問を入力する</li>
<li>「送信」を押す</li>
</ol>"#;

const STYLE: &str = r#"body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;line-height:1.6}
fieldset{border:none;padding:0;margin:1rem 0}
.radios label{margin-right:1.5rem}
input[type=text]{width:100%;box-sizing:border-box;padding:.5rem;font-size:1rem}
button{margin-top:1rem;padding:.5rem 1.5rem;background:#ff4b4b;color:#fff;border:none;border-radius:.4rem;font-size:1rem;cursor:pointer}
.notice{padding:.75rem 1rem;border-radius:.4rem;margin:1rem 0}
.warning{background:#fffce7;color:#926c05}
.error{background:#ffecec;color:#7d1a1a}
.caption{color:#888;font-size:.85rem;margin-top:2rem}"#;

/// Render the whole document for `view`.
pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{HEADING}</h1>\n{INTRO}\n"
    ));

    if let Outcome::Halted(err) = &view.outcome {
        notice(&mut html, "error", err.user_message());
    } else {
        render_form(&mut html, view);

        match &view.outcome {
            Outcome::Idle | Outcome::Halted(_) => {}
            Outcome::Warned(err) => notice(&mut html, "warning", err.user_message()),
            Outcome::Failed(err) => notice(&mut html, "error", err.user_message()),
            Outcome::Answered(answer) => {
                html.push_str(&format!(
                    "<h2>{ANSWER_HEADING}</h2>\n<div class=\"answer\" id=\"answer\">\n"
                ));
                render_markdown(&mut html, answer);
                html.push_str("</div>\n");
            }
        }
    }

    html.push_str(&format!(
        "<p class=\"caption\">{FOOTER_CAUTION}</p>\n</body>\n</html>\n"
    ));

    html
}

fn render_form(html: &mut String, view: &PageView) {
    html.push_str(&format!(
        "<form method=\"post\" action=\"/\" \
         onsubmit=\"document.getElementById('spinner').hidden=false\">\n\
         <fieldset class=\"radios\">\n<legend>{PERSONA_LEGEND}</legend>\n"
    ));

    for persona in Persona::ALL {
        let checked = if persona == view.persona { " checked" } else { "" };
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"persona\" value=\"{}\"{checked}> {}</label>\n",
            persona.key(),
            encode_text(persona.label())
        ));
    }

    html.push_str(&format!(
        "</fieldset>\n<label for=\"question\">{QUESTION_LABEL}</label>\n\
         <input type=\"text\" id=\"question\" name=\"question\" value=\"{}\" placeholder=\"{}\">\n\
         <button type=\"submit\">{SUBMIT_LABEL}</button>\n\
         <p id=\"spinner\" hidden>{SPINNER_TEXT}</p>\n</form>\n",
        encode_double_quoted_attribute(&view.question),
        encode_double_quoted_attribute(QUESTION_PLACEHOLDER)
    ));
}

fn notice(html: &mut String, class: &str, message: &str) {
    html.push_str(&format!(
        "<div class=\"notice {class}\" role=\"alert\">{}</div>\n",
        encode_text(message)
    ));
}

/// Render the completion as CommonMark (tables and strikethrough on).
///
/// Raw HTML in the answer is emitted as escaped text, and links or images
/// pointing anywhere but http(s), mailto or a fragment lose their target.
fn render_markdown(html: &mut String, markdown: &str) {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    push_html(html, events);
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim_start().to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:", "#"]
        .iter()
        .any(|prefix| lower.starts_with(prefix));
    if allowed { url } else { CowStr::Borrowed("#") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    #[test]
    fn idle_page_has_form_and_default_persona() {
        let html = render_page(&PageView::idle());
        assert!(html.contains("<form"));
        assert!(html.contains("value=\"career_coach\" checked"));
        assert!(!html.contains("value=\"travel_planner\" checked"));
        assert!(html.contains(FOOTER_CAUTION));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn unconfigured_page_has_no_form() {
        let html = render_page(&PageView::unconfigured());
        assert!(!html.contains("<form"));
        assert!(html.contains(PageError::Configuration.user_message()));
    }

    #[test]
    fn answer_and_question_are_escaped() {
        let view = PageView {
            persona: Persona::TravelPlanner,
            question: "\"><script>x</script>".into(),
            outcome: Outcome::Answered("<b>plan</b> & more".into()),
        };
        let html = render_page(&view);

        assert!(html.contains("value=\"travel_planner\" checked"));
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;b&gt;plan&lt;/b&gt; &amp; more"));
        assert!(html.contains(&format!("<h2>{ANSWER_HEADING}</h2>")));
    }

    #[test]
    fn answer_markdown_renders_headings_and_lists() {
        let view = PageView {
            persona: Persona::TravelPlanner,
            question: "京都".into(),
            outcome: Outcome::Answered(
                "### 1日目\n- **京都駅** 集合\n- 清水寺\n\n<script>alert(1)</script>\n".into(),
            ),
        };
        let html = render_page(&view);

        assert!(html.contains("<h3>1日目</h3>"));
        assert!(html.contains("<li><strong>京都駅</strong> 集合</li>"));
        assert!(html.contains("<li>清水寺</li>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn answer_links_keep_only_safe_targets() {
        let view = PageView {
            persona: Persona::TravelPlanner,
            question: "京都".into(),
            outcome: Outcome::Answered(
                "[公式](https://example.com/kyoto) と [罠](javascript:alert(1))".into(),
            ),
        };
        let html = render_page(&view);

        assert!(html.contains("<a href=\"https://example.com/kyoto\">公式</a>"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<a href=\"#\">罠</a>"));
    }

    #[test]
    fn heading_matches_page_title() {
        let html = render_page(&PageView::idle());
        assert!(html.contains("<h1>🤖 Expert Desk × OpenAI</h1>"));
    }

    #[test]
    fn warning_keeps_form() {
        let view = PageView {
            persona: Persona::CareerCoach,
            question: "   ".into(),
            outcome: Outcome::Warned(PageError::Validation),
        };
        let html = render_page(&view);
        assert!(html.contains("<form"));
        assert!(html.contains("notice warning"));
        assert!(html.contains(PageError::Validation.user_message()));
    }
}
