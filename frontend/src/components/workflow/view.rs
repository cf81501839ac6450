//! View rendering for the workflow component.
//!
//! `Upload` shows the file picker, the validation counters and the valid and
//! invalid tables. `Message` shows the back button, the same validation report,
//! the message box and the generated links. User-facing text is in Portuguese.

use common::model::link::LinkRecord;
use common::model::report::ValidationReport;
use common::model::screen::Screen;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::format_count;
use super::messages::Msg;
use super::state::WorkflowComponent;

const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%; background: #fff;";
const CELL_STYLE: &str = "border: 1px solid #ddd; padding: 6px 10px; text-align: left;";
const BUTTON_STYLE: &str = "padding: 8px 16px; margin: 8px 8px 8px 0; cursor: pointer;";

pub fn view(component: &WorkflowComponent, ctx: &Context<WorkflowComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="workflow-root">
            { error_banner(component) }
            {
                match component.screen {
                    Screen::Upload => upload_screen(component, link),
                    Screen::Message => message_screen(component, link),
                }
            }
        </div>
    }
}

fn error_banner(component: &WorkflowComponent) -> Html {
    match &component.error {
        Some(error) => html! {
            <div style="background: #fdecea; color: #b71c1c; padding: 10px 14px; border-radius: 4px; margin-bottom: 12px;">
                { format!("❌ {}", error) }
            </div>
        },
        None => html! {},
    }
}

fn warning_banner(text: &str) -> Html {
    html! {
        <div style="background: #fff8e1; color: #8d6e00; padding: 10px 14px; border-radius: 4px; margin: 12px 0;">
            { text.to_string() }
        </div>
    }
}

fn upload_screen(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let on_file_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });
    let can_validate =
        component.session_id.is_some() && component.selected_file.is_some() && !component.busy;

    html! {
        <>
            <h1>{ "📱 Validação de Números de Telefone" }</h1>
            <p>{ "Carregue sua planilha Excel ou CSV com os números de telefone (coluna 'telefone')." }</p>
            <input type="file" accept=".csv,.xlsx" onchange={on_file_change} />
            <div>
                <button
                    style={BUTTON_STYLE}
                    disabled={!can_validate}
                    onclick={link.callback(|_| Msg::Validate)}
                >
                    { if component.busy { "Validando..." } else { "Validar Números" } }
                </button>
            </div>
            {
                match &component.report {
                    Some(report) => report_view(report, component.report_warning.as_deref()),
                    None => html! {},
                }
            }
        </>
    }
}

fn report_view(report: &ValidationReport, warning: Option<&str>) -> Html {
    html! {
        <>
            <div style="display: flex; gap: 16px; margin: 16px 0;">
                { metric("Total de Números", report.total) }
                { metric("✅ Números Válidos", report.valid_count()) }
                { metric("❌ Números Inválidos", report.invalid_count()) }
            </div>
            { warning.map(warning_banner).unwrap_or_default() }
            <h3>{ "✅ Números Válidos" }</h3>
            {
                if report.valid.is_empty() {
                    html! { <p>{ "Nenhum número válido encontrado" }</p> }
                } else {
                    html! {
                        <table style={TABLE_STYLE}>
                            <tr><th style={CELL_STYLE}>{ "Telefone Formatado" }</th></tr>
                            { for report.valid.iter().map(|phone| html! {
                                <tr><td style={CELL_STYLE}>{ phone.clone() }</td></tr>
                            }) }
                        </table>
                    }
                }
            }
            <h3>{ "❌ Números Inválidos" }</h3>
            {
                if report.invalid.is_empty() {
                    html! { <p>{ "Nenhum número inválido encontrado" }</p> }
                } else {
                    html! {
                        <table style={TABLE_STYLE}>
                            <tr>
                                <th style={CELL_STYLE}>{ "telefone" }</th>
                                <th style={CELL_STYLE}>{ "Motivo" }</th>
                            </tr>
                            { for report.invalid.iter().map(|row| html! {
                                <tr>
                                    <td style={CELL_STYLE}>{ row.raw.clone() }</td>
                                    <td style={CELL_STYLE}>{ row.reason.description() }</td>
                                </tr>
                            }) }
                        </table>
                    }
                }
            }
        </>
    }
}

fn metric(label: &str, value: usize) -> Html {
    html! {
        <div style="flex: 1; background: #fff; border-radius: 4px; padding: 12px; box-shadow: 0 0 4px #ccc;">
            <div style="color: #666; font-size: 0.9rem;">{ label.to_string() }</div>
            <div style="font-size: 1.8rem; font-weight: bold;">{ format_count(value) }</div>
        </div>
    }
}

fn message_screen(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    html! {
        <>
            <h1>{ "💬 Geração de Links do WhatsApp" }</h1>
            <button
                style={BUTTON_STYLE}
                disabled={component.busy}
                onclick={link.callback(|_| Msg::Back)}
            >
                { "⬅️ Voltar" }
            </button>
            {
                match &component.report {
                    Some(report) => html! {
                        <details open={true}>
                            <summary>{ "Resultado da validação" }</summary>
                            { report_view(report, component.report_warning.as_deref()) }
                        </details>
                    },
                    None => html! {},
                }
            }
            {
                if component.stored_numbers.is_empty() {
                    warning_banner("Por favor, volte e carregue os números primeiro.")
                } else {
                    compose_view(component, link)
                }
            }
        </>
    }
}

fn compose_view(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let on_input = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::UpdateMessage(textarea.value())
    });

    html! {
        <>
            <p>{ format!("{} números válidos carregados.", format_count(component.stored_numbers.len())) }</p>
            <label for="message">{ "Digite sua mensagem:" }</label>
            <textarea
                id="message"
                rows="6"
                style="display: block; width: 100%; margin-top: 6px;"
                placeholder="Olá! Temos uma oferta especial para você..."
                value={component.message.clone()}
                oninput={on_input}
            />
            {
                // Generation is only offered for a non-empty message.
                if component.message.is_empty() {
                    html! {}
                } else {
                    html! {
                        <button
                            style={BUTTON_STYLE}
                            disabled={component.busy}
                            onclick={link.callback(|_| Msg::Generate)}
                        >
                            { "Gerar Links" }
                        </button>
                    }
                }
            }
            { component.links_warning.as_deref().map(warning_banner).unwrap_or_default() }
            { links_table(&component.links) }
        </>
    }
}

fn links_table(links: &[LinkRecord]) -> Html {
    if links.is_empty() {
        return html! {};
    }

    html! {
        <details open={true} style="margin-top: 12px;">
            <summary>{ "Ver Links Gerados" }</summary>
            <table style={TABLE_STYLE}>
                <tr>
                    <th style={CELL_STYLE}>{ "Telefone" }</th>
                    <th style={CELL_STYLE}>{ "Link" }</th>
                </tr>
                { for links.iter().map(|record| html! {
                    <tr>
                        <td style={CELL_STYLE}>{ record.phone.clone() }</td>
                        <td style={CELL_STYLE}>
                            <a href={record.link.clone()} target="_blank" rel="noopener noreferrer">
                                { record.link.clone() }
                            </a>
                        </td>
                    </tr>
                }) }
            </table>
        </details>
    }
}
