use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: AttrValue,
    pub message: String,
    /// Set after a failed delete; the dialog stays open for a retry.
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal confirmation used by every destructive action.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog dialog-sm">
                <h2 class="dialog-title">{props.title.clone()}</h2>
                <p class="dialog-message">{props.message.clone()}</p>
                if let Some(error) = &props.error {
                    <p class="form-error">{error.clone()}</p>
                }
                <div class="dialog-footer">
                    <button class="btn btn-outline" onclick={on_cancel} disabled={props.busy}>
                        {"Annulla"}
                    </button>
                    <button class="btn btn-danger" onclick={on_confirm} disabled={props.busy}>
                        {if props.busy { "Eliminazione..." } else { "Elimina" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
