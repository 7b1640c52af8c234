//! Social share snippets, each carrying a `{{url}}` placeholder for the
//! referral link.

pub const URL_PLACEHOLDER: &str = "{{url}}";

const TWITTER: &str = r#"<a class="twitter-share-button" 
   data-url="{{url}}"
   href="https://twitter.com/share" 
   data-count="none">
     Tweet
</a>

<script src="http://platform.twitter.com/widgets.js" 
        type="text/javascript">
</script>"#;

const FACEBOOK: &str = r#"<div id="fb-root">
  <script type="text/javascript">
    (function(d, s, id) {
      var js, fjs = d.getElementsByTagName(s)[0];
      if (d.getElementById(id)) {return;}
      js = d.createElement(s); js.id = id;
      js.src = "http://connect.facebook.net/en_US/all.js#xfbml=1";
      fjs.parentNode.insertBefore(js, fjs);
    }(document, 'script', 'facebook-jssdk'));
  </script>

  <div class="fb-like" 
       data-href="{{url}}" 
       data-send="false" 
       data-layout="button_count" 
       data-width="300" 
       data-show-faces="false" 
       data-font="arial">
  </div>
</div>"#;

const LINKEDIN: &str = r#"<script src="http://platform.linkedin.com/in.js" type="text/javascript"></script>
<script type="IN/Share" data-url="{{url}}"></script>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTemplate {
    Twitter,
    Facebook,
    LinkedIn,
}

impl ShareTemplate {
    pub const ALL: [ShareTemplate; 3] = [
        ShareTemplate::Twitter,
        ShareTemplate::Facebook,
        ShareTemplate::LinkedIn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShareTemplate::Twitter => "twitter",
            ShareTemplate::Facebook => "facebook",
            ShareTemplate::LinkedIn => "linkedin",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            ShareTemplate::Twitter => TWITTER,
            ShareTemplate::Facebook => FACEBOOK,
            ShareTemplate::LinkedIn => LINKEDIN,
        }
    }
}

/// Substitutes `url` for every `{{url}}` in the template body.
///
/// `url` is inserted verbatim, without HTML escaping: referral links are
/// generated by the signup endpoint and trusted as such.
// TODO: escape `url` for attribute context once the endpoint stops being the only source of links.
pub fn render(template: ShareTemplate, url: &str) -> String {
    template.body().replace(URL_PLACEHOLDER, url)
}
