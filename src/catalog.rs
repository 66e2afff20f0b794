use crate::handler::Location;
use crate::router::route::Route;
use crate::router::table::RouteTableBuilder;

/// Built-in routes of the site, in declaration order.
///
/// The catch-all page route comes first so every other route overrides it;
/// within the groups below a later route overrides an earlier one for any
/// overlapping path (e.g. the sorted video listings are declared after the
/// category listing, whose character class also matches the sort keywords).
///
/// Register filters on the returned builder to extend or reshape the table
/// before calling [RouteTableBuilder::build].
pub fn built_in() -> RouteTableBuilder {
    RouteTableBuilder::new()
        // Catch-all route
        .add_route(Route::new("pages", r".*", Location::Page))
        // General routes
        .add_route(Route::new("index", r"/", Location::Index))
        .add_route(Route::new("browseVideos", r"videos", Location::Videos))
        .add_route(
            Route::new("browseVideosPaginated", r"videos/page/([0-9]+)", Location::Videos)
                .param("page"),
        )
        .add_route(
            Route::new("browseVideosCategories", r"videos/([a-z0-9\-]+)", Location::Videos)
                .param("category"),
        )
        .add_route(
            Route::new(
                "browseVideosCategoriesPaginated",
                r"videos/([a-z0-9\-]+)/page/([0-9]+)",
                Location::Videos,
            )
            .param("category")
            .param("page"),
        )
        .add_route(
            Route::new(
                "browseVideosSorted",
                r"videos/(most-recent|most-viewed|most-discussed|most-rated)",
                Location::Videos,
            )
            .param("load"),
        )
        .add_route(
            Route::new(
                "browseVideosSortedPaginated",
                r"videos/(most-recent|most-viewed|most-discussed|most-rated)/page/([0-9]+)",
                Location::Videos,
            )
            .param("load")
            .param("page"),
        )
        .add_route(
            Route::new("play", r"videos/([0-9]+)/[a-z0-9\-]+", Location::Play).param("vid"),
        )
        .add_route(Route::new("browseMembers", r"members", Location::Members))
        .add_route(
            Route::new("browseMembersPaginated", r"members/page/([0-9]+)", Location::Members)
                .param("page"),
        )
        .add_route(
            Route::new("profile", r"members/([a-z0-9]+)", Location::Profile).param("username"),
        )
        .add_route(Route::new("optOut", r"opt-out", Location::OptOut))
        .add_route(Route::new("register", r"register", Location::Register))
        .add_route(Route::new("activate", r"activate", Location::Activate))
        .add_route(Route::new("login", r"login", Location::Login))
        .add_route(Route::new("forgotPassword", r"login/(forgot)", Location::Login).param("action"))
        .add_route(Route::new("logout", r"logout", Location::Logout))
        .add_route(Route::new("search", r"search", Location::Search))
        .add_route(
            Route::new("searchPaginated", r"search/page/([0-9]+)", Location::Search).param("page"),
        )
        .add_route(Route::new("contact", r"contact", Location::Contact))
        // Private video routes
        .add_route(
            Route::new("getPrivateCode", r"private/get", Location::Play)
                .literal("get_private", "true"),
        )
        .add_route(
            Route::new("privateVideoPlay", r"private/videos/([a-z0-9]+)", Location::Play)
                .param("private"),
        )
        // My account routes
        .add_route(Route::new("myaccount", r"myaccount", Location::MyAccount))
        .add_route(Route::new("myaccountUpload", r"myaccount/upload", Location::Upload))
        .add_route(
            Route::new("myaccountUploadVideo", r"myaccount/upload/video", Location::UploadVideo),
        )
        .add_route(
            Route::new(
                "myaccountUploadComplete",
                r"myaccount/upload/complete",
                Location::UploadComplete,
            ),
        )
        .add_route(Route::new("myaccountMyVideos", r"myaccount/myvideos", Location::MyVideos))
        .add_route(
            Route::new(
                "myaccountMyVideosDelete",
                r"myaccount/myvideos/([0-9]+)",
                Location::MyVideos,
            )
            .param("vid"),
        )
        .add_route(
            Route::new(
                "myaccountMyVideosPaginated",
                r"myaccount/myvideos/page/([0-9]+)",
                Location::MyVideos,
            )
            .param("page"),
        )
        .add_route(
            Route::new(
                "myaccountEditVideo",
                r"myaccount/editvideo/([0-9]+)",
                Location::EditVideo,
            )
            .param("vid"),
        )
        .add_route(Route::new("myaccountPlaylists", r"myaccount/playlists", Location::Playlists))
        .add_route(
            Route::new(
                "myaccountPlaylistsEdit",
                r"myaccount/playlists/edit/([0-9]+)",
                Location::PlaylistsEdit,
            )
            .param("playlist_id"),
        )
        .add_route(
            Route::new("myaccountUpdateProfile", r"myaccount/profile", Location::UpdateProfile),
        )
        .add_route(
            Route::new(
                "myaccountResetAvatar",
                r"myaccount/profile/(reset)",
                Location::UpdateProfile,
            )
            .param("action"),
        )
        .add_route(
            Route::new(
                "myaccountPrivacySettings",
                r"myaccount/privacy-settings",
                Location::PrivacySettings,
            ),
        )
        .add_route(
            Route::new(
                "myaccountChangePassword",
                r"myaccount/change-password",
                Location::ChangePassword,
            ),
        )
        .add_route(
            Route::new("myaccountSubscriptions", r"myaccount/subscriptions", Location::Subscriptions),
        )
        .add_route(
            Route::new(
                "myaccountSubscriptionsDelete",
                r"myaccount/subscriptions/([0-9]+)",
                Location::Subscriptions,
            )
            .param("id"),
        )
        .add_route(
            Route::new(
                "myaccountSubscriptionsPaginated",
                r"myaccount/subscriptions/page/([0-9]+)",
                Location::Subscriptions,
            )
            .param("page"),
        )
        .add_route(
            Route::new("myaccountSubscribers", r"myaccount/subscribers", Location::Subscribers),
        )
        .add_route(
            Route::new(
                "myaccountSubscribersPaginated",
                r"myaccount/subscribers/page/([0-9]+)",
                Location::Subscribers,
            )
            .param("page"),
        )
        .add_route(
            Route::new("myaccountInbox", r"myaccount/message/inbox", Location::MessageInbox),
        )
        .add_route(
            Route::new(
                "myaccountInboxDelete",
                r"myaccount/message/inbox/([0-9]+)",
                Location::MessageInbox,
            )
            .param("delete"),
        )
        .add_route(
            Route::new(
                "myaccountInboxPaginated",
                r"myaccount/message/inbox/page/([0-9]+)",
                Location::MessageInbox,
            )
            .param("page"),
        )
        .add_route(
            Route::new(
                "myaccountReadMessage",
                r"myaccount/message/read/([0-9]+)",
                Location::MessageRead,
            )
            .param("msg"),
        )
        .add_route(
            Route::new("myaccountSendMessage", r"myaccount/message/send", Location::MessageSend),
        )
        .add_route(
            Route::new(
                "myaccountSendMessageUsername",
                r"myaccount/message/send/([a-z0-9]+)",
                Location::MessageSend,
            )
            .param("username"),
        )
        .add_route(
            Route::new(
                "myaccountSendMessageReply",
                r"myaccount/message/reply/([0-9]+)",
                Location::MessageSend,
            )
            .param("msg"),
        )
        // Mobile routes
        .add_route(Route::new("mobile", r"m", Location::MobileIndex).mobile())
        .add_route(Route::new("mobileBrowseVideos", r"m/v", Location::MobileVideos).mobile())
        .add_route(
            Route::new("mobilePlay", r"m/v/([0-9]+)", Location::MobilePlay)
                .param("vid")
                .mobile(),
        )
        .add_route(Route::new("mobileSearch", r"m/s", Location::MobileSearch).mobile())
        .add_route(Route::new("mobileLogin", r"m/l", Location::MobileLogin).mobile())
        .add_route(
            Route::new("mobileUser", r"m/u/([a-z0-9]+)", Location::MobileUser)
                .param("username")
                .mobile(),
        )
        // System routes
        .add_route(Route::new("system404", r"not-found", Location::NotFound))
        .add_route(Route::new("systemError", r"system-error", Location::SystemError))
        .add_route(Route::new("embed", r"embed/([0-9]+)", Location::Embed).param("vid"))
        .add_route(Route::new("languageGet", r"language/(get)", Location::Language).param("action"))
        .add_route(
            Route::new("languageSet", r"language/(set)/(.*)", Location::Language)
                .param("action")
                .param("language"),
        )
        .add_route(Route::new("videoSitemap", r"video-sitemap\.xml", Location::VideoSitemap))
        .add_route(
            Route::new(
                "videoSitemapPaginated",
                r"video-sitemap-([0-9]+)\.xml",
                Location::VideoSitemap,
            )
            .param("page"),
        )
        // AJAX routes
        .add_route(Route::new("ajaxMemberVideos", r"members/videos", Location::AjaxMemberVideos))
        .add_route(
            Route::new("ajaxMemberPlaylists", r"members/playlists", Location::AjaxMemberPlaylists),
        )
        .add_route(Route::new("ajaxSearchSuggest", r"search/suggest", Location::AjaxSearchSuggest))
        .add_route(Route::new("ajaxAvatarUpload", r"myaccount/upload/avatar", Location::AjaxAvatar))
        .add_route(
            Route::new("ajaxVideoUpload", r"myaccount/upload/validate", Location::AjaxUploadValidate),
        )
        .add_route(Route::new("ajaxUsernameExists", r"actions/username", Location::AjaxUsername))
        .add_route(Route::new("ajaxFlag", r"actions/flag", Location::AjaxFlag))
        .add_route(Route::new("ajaxPlaylist", r"actions/playlist", Location::AjaxPlaylist))
        .add_route(Route::new("ajaxSubscribe", r"actions/subscribe", Location::AjaxSubscribe))
        .add_route(Route::new("ajaxRate", r"actions/rate", Location::AjaxRate))
        .add_route(Route::new("ajaxCommentAdd", r"actions/comment/add", Location::AjaxCommentAdd))
        .add_route(Route::new("ajaxCommentGet", r"actions/comments/get", Location::AjaxCommentGet))
        .add_route(Route::new("ajaxPost", r"actions/post", Location::AjaxPost))
        .add_route(
            Route::new("ajaxMobileLoadMoreVideos", r"actions/mobile-videos", Location::AjaxMobileVideos)
                .mobile(),
        )
        .add_route(
            Route::new("ajaxMobileLoadMoreSearch", r"actions/mobile-search", Location::AjaxMobileSearch)
                .mobile(),
        )
        // API routes
        .add_route(Route::new("apiGetVideo", r"api/video/([0-9]+)", Location::ApiVideo).param("videoId"))
        .add_route(Route::new("apiGetVideoList", r"api/video/list", Location::ApiVideoList))
}
