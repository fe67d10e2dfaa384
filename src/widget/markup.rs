use super::options::is_hex_color;
use super::view::WidgetView;
use tera::{Context, Tera};

const STYLESHEET: &str = r"
.pr-feedback-button {
  position: fixed;
  z-index: 9999;
  padding: 10px 18px;
  border: none;
  border-radius: 6px;
  background: {{ primary_color }};
  color: #ffffff;
  font: 500 14px system-ui, sans-serif;
  cursor: pointer;
}
.pr-feedback-button.bottom-right { bottom: 20px; right: 20px; }
.pr-feedback-button.bottom-left { bottom: 20px; left: 20px; }
.pr-feedback-button.top-right { top: 20px; right: 20px; }
.pr-feedback-button.top-left { top: 20px; left: 20px; }
.pr-feedback-overlay {
  position: fixed;
  inset: 0;
  z-index: 10000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
}
.pr-feedback-modal {
  width: 90%;
  max-width: 420px;
  padding: 24px;
  border-radius: 8px;
  background: #ffffff;
  font-family: system-ui, sans-serif;
}
.pr-feedback-modal textarea,
.pr-feedback-modal input[type=email] {
  width: 100%;
  margin-bottom: 12px;
  padding: 8px;
  border: 1px solid #d4d4d8;
  border-radius: 4px;
}
.pr-feedback-modal textarea:focus,
.pr-feedback-modal input:focus { outline: 2px solid {{ primary_color }}; }
.pr-feedback-submit {
  width: 100%;
  padding: 10px;
  border: none;
  border-radius: 4px;
  background: {{ primary_color }};
  color: #ffffff;
  cursor: pointer;
}
.pr-feedback-submit:disabled { opacity: 0.6; cursor: not-allowed; }
.pr-feedback-error { margin-bottom: 12px; color: #dc2626; font-size: 13px; }
.pr-feedback-success { text-align: center; padding: 24px 0; }
.pr-feedback-preview img { max-width: 100%; max-height: 160px; border-radius: 4px; }
.pr-feedback-toast {
  position: fixed;
  bottom: 20px;
  left: 50%;
  transform: translateX(-50%);
  padding: 10px 16px;
  border-radius: 6px;
  background: #18181b;
  color: #ffffff;
}
";

const BUTTON: &str = r#"<button type="button" class="pr-feedback-button {{ view.position }}">{{ view.button_text }}</button>"#;

const MODAL: &str = r#"{% if view.modal_open %}<div class="pr-feedback-overlay">
<div class="pr-feedback-modal" role="dialog" aria-label="{{ view.title }}">
<button type="button" class="pr-feedback-close" aria-label="Close">&times;</button>
<h2>{{ view.title }}</h2>
{% if view.success %}<div class="pr-feedback-success">{{ toast_text }}</div>
{% else %}<form class="pr-feedback-form">
<textarea name="message" placeholder="{{ view.placeholder }}" required>{{ view.message }}</textarea>
<input type="email" name="email" placeholder="Email (optional)" value="{{ view.email }}">
{% if view.attachment %}<div class="pr-feedback-preview">
<img src="{{ view.attachment.data_url }}" alt="{% if view.attachment.filename %}{{ view.attachment.filename }}{% else %}attachment{% endif %}">
<button type="button" class="pr-feedback-remove-image">Remove</button>
</div>
{% else %}<input type="file" name="image" accept="image/*">
{% endif %}{% if view.error_banner %}<div class="pr-feedback-error">{{ view.error_banner }}</div>
{% endif %}<button type="submit" class="pr-feedback-submit"{% if view.submit_disabled %} disabled{% endif %}>{{ view.submit_label }}</button>
</form>
{% endif %}</div>
</div>
{% endif %}{% if view.toast %}<div class="pr-feedback-toast" role="status">{{ view.toast }}</div>
{% endif %}"#;

/// Renders widget markup from a [`WidgetView`]. User-supplied text is
/// HTML-escaped.
pub struct MarkupEngine {
    tera: Tera,
}

impl MarkupEngine {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        // `.html` names turn on autoescaping.
        tera.add_raw_templates(vec![
            ("widget/style.css", STYLESHEET),
            ("widget/button.html", BUTTON),
            ("widget/modal.html", MODAL),
        ])?;
        Ok(Self { tera })
    }

    pub fn render_stylesheet(&self, primary_color: &str) -> anyhow::Result<String> {
        if !is_hex_color(primary_color) {
            anyhow::bail!("primary color `{primary_color}` is not a hex color");
        }
        let mut ctx = Context::new();
        ctx.insert("primary_color", primary_color);
        Ok(self.tera.render("widget/style.css", &ctx)?)
    }

    pub fn render_button(&self, view: &WidgetView) -> anyhow::Result<String> {
        Ok(self.tera.render("widget/button.html", &view_context(view))?)
    }

    pub fn render_modal(&self, view: &WidgetView) -> anyhow::Result<String> {
        Ok(self.tera.render("widget/modal.html", &view_context(view))?)
    }

    /// Stylesheet, floating button and (when open) the modal, in mount order.
    pub fn render_widget(&self, view: &WidgetView) -> anyhow::Result<String> {
        Ok(format!(
            "<style>{}</style>\n{}\n{}",
            self.render_stylesheet(&view.primary_color)?,
            self.render_button(view)?,
            self.render_modal(view)?
        ))
    }
}

fn view_context(view: &WidgetView) -> Context {
    let mut ctx = Context::new();
    ctx.insert("view", view);
    ctx.insert("toast_text", super::view::SUCCESS_TOAST);
    ctx
}
