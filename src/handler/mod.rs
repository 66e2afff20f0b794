use std::fmt::Display;

pub use registry::HandlerRegistry;

mod registry;

/// Identifies the controller a matched route dispatches to.
///
/// One variant per built-in controller of the site; routes added through a
/// table filter use [Location::Extension] with their own key. The router
/// never invokes a handler itself, the host resolves the location through a
/// [HandlerRegistry] and runs whatever it registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Page,
    Index,
    Videos,
    Play,
    Members,
    Profile,
    OptOut,
    Register,
    Activate,
    Login,
    Logout,
    Search,
    Contact,
    MyAccount,
    Upload,
    UploadVideo,
    UploadComplete,
    MyVideos,
    EditVideo,
    Playlists,
    PlaylistsEdit,
    UpdateProfile,
    PrivacySettings,
    ChangePassword,
    Subscriptions,
    Subscribers,
    MessageInbox,
    MessageRead,
    MessageSend,
    MobileIndex,
    MobileVideos,
    MobilePlay,
    MobileSearch,
    MobileLogin,
    MobileUser,
    NotFound,
    SystemError,
    Embed,
    Language,
    VideoSitemap,
    AjaxMemberVideos,
    AjaxMemberPlaylists,
    AjaxSearchSuggest,
    AjaxAvatar,
    AjaxUploadValidate,
    AjaxUsername,
    AjaxFlag,
    AjaxPlaylist,
    AjaxSubscribe,
    AjaxRate,
    AjaxCommentAdd,
    AjaxCommentGet,
    AjaxPost,
    AjaxMobileVideos,
    AjaxMobileSearch,
    ApiVideo,
    ApiVideoList,
    Extension(String),
}

impl Location {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Page => "page",
            Self::Index => "index",
            Self::Videos => "videos",
            Self::Play => "play",
            Self::Members => "members",
            Self::Profile => "profile",
            Self::OptOut => "opt-out",
            Self::Register => "register",
            Self::Activate => "activate",
            Self::Login => "login",
            Self::Logout => "system/logout",
            Self::Search => "search",
            Self::Contact => "contact",
            Self::MyAccount => "myaccount",
            Self::Upload => "myaccount/upload",
            Self::UploadVideo => "myaccount/upload-video",
            Self::UploadComplete => "myaccount/upload-complete",
            Self::MyVideos => "myaccount/myvideos",
            Self::EditVideo => "myaccount/edit-video",
            Self::Playlists => "myaccount/playlists",
            Self::PlaylistsEdit => "myaccount/playlists-edit",
            Self::UpdateProfile => "myaccount/update-profile",
            Self::PrivacySettings => "myaccount/privacy-settings",
            Self::ChangePassword => "myaccount/change-password",
            Self::Subscriptions => "myaccount/subscriptions",
            Self::Subscribers => "myaccount/subscribers",
            Self::MessageInbox => "myaccount/message-inbox",
            Self::MessageRead => "myaccount/message-read",
            Self::MessageSend => "myaccount/message-send",
            Self::MobileIndex => "mobile/index",
            Self::MobileVideos => "mobile/videos",
            Self::MobilePlay => "mobile/play",
            Self::MobileSearch => "mobile/search",
            Self::MobileLogin => "mobile/login",
            Self::MobileUser => "mobile/user",
            Self::NotFound => "system/not-found",
            Self::SystemError => "system/error",
            Self::Embed => "system/embed",
            Self::Language => "system/language",
            Self::VideoSitemap => "system/video-sitemap",
            Self::AjaxMemberVideos => "ajax/member-videos",
            Self::AjaxMemberPlaylists => "ajax/member-playlists",
            Self::AjaxSearchSuggest => "ajax/search-suggest",
            Self::AjaxAvatar => "ajax/avatar",
            Self::AjaxUploadValidate => "ajax/upload-validate",
            Self::AjaxUsername => "ajax/username",
            Self::AjaxFlag => "ajax/flag",
            Self::AjaxPlaylist => "ajax/playlist",
            Self::AjaxSubscribe => "ajax/subscribe",
            Self::AjaxRate => "ajax/rate",
            Self::AjaxCommentAdd => "ajax/comment-add",
            Self::AjaxCommentGet => "ajax/comment-get",
            Self::AjaxPost => "ajax/post",
            Self::AjaxMobileVideos => "ajax/mobile-videos",
            Self::AjaxMobileSearch => "ajax/mobile-search",
            Self::ApiVideo => "api/video",
            Self::ApiVideoList => "api/video-list",
            Self::Extension(name) => name,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
